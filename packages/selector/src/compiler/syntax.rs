//! Fragment scanner
//!
//! Breaks one simple-selector fragment into its tagged parts:
//!
//! ```text
//! [element] [('#'|'.'|'$') identity] [':' pseudo ['(' argument ')']] ['[' clause ']']*
//! ```
//!
//! The pseudo clause is also accepted after the attribute clauses, as long as
//! there is only one. Text that fits nowhere is kept in `unrecognized` so the
//! compiler can turn it into a requirement that never matches.

use crate::reader::ESCAPE_CHARACTER;

/// Identity requirement selected by its marker character
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// `#value`, equality with the `id` attribute
    Id(String),
    /// `$value`, equality with the `name` attribute
    Name(String),
    /// `.value`, membership in the class list
    Class(String),
}

impl Identity {
    fn from_marker(marker: char, value: String) -> Option<Self> {
        match marker {
            '#' => Some(Identity::Id(value)),
            '$' => Some(Identity::Name(value)),
            '.' => Some(Identity::Class(value)),
            _ => None,
        }
    }
}

/// `:name(argument)` clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoClause {
    pub name: String,
    /// Trimmed argument text, empty when no argument was given
    pub argument: String,
}

/// Operator and literal of an attribute clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTest {
    /// Modifier before `=`; `None` for the plain `=` comparison
    pub operator: Option<char>,
    /// Literal with quotes stripped and escapes resolved
    pub value: String,
}

/// One bracketed attribute clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeClause {
    pub name: String,
    /// `None` for a bare "has attribute" clause
    pub test: Option<AttributeTest>,
}

/// Tagged structure of a single fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSyntax {
    pub element: Option<String>,
    pub identity: Option<Identity>,
    pub pseudo: Option<PseudoClause>,
    pub attributes: Vec<AttributeClause>,
    /// Trailing text the scanner could not place
    pub unrecognized: Option<String>,
}

impl FragmentSyntax {
    /// Scan a fragment
    #[must_use]
    pub fn parse(fragment: &str) -> Self {
        let chars: Vec<char> = fragment.trim().chars().collect();
        let mut syntax = FragmentSyntax::default();
        let mut i = 0;

        // element name or wildcard
        if chars.first() == Some(&'*') {
            syntax.element = Some("*".to_string());
            i = 1;
        } else {
            let (name, next) = take_name(&chars, i);
            if !name.is_empty() {
                syntax.element = Some(name);
            }
            i = next;
        }

        // identity
        if let Some(&marker) = chars.get(i) {
            let (value, next) = take_name(&chars, i + 1);
            if !value.is_empty() {
                if let Some(identity) = Identity::from_marker(marker, value) {
                    syntax.identity = Some(identity);
                    i = next;
                }
            }
        }

        // pseudo and attribute clauses, in either order
        while i < chars.len() {
            let next = match chars[i] {
                '[' => read_attribute_clause(&chars, i).map(|(clause, next)| {
                    syntax.attributes.push(clause);
                    next
                }),
                ':' if syntax.pseudo.is_none() => {
                    read_pseudo_clause(&chars, i).map(|(pseudo, next)| {
                        syntax.pseudo = Some(pseudo);
                        next
                    })
                }
                _ => None,
            };

            match next {
                Some(next) => i = next,
                None => {
                    syntax.unrecognized = Some(chars[i..].iter().collect());
                    break;
                }
            }
        }

        syntax
    }
}

#[inline]
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Reads a run of name characters starting at `start`
fn take_name(chars: &[char], start: usize) -> (String, usize) {
    let mut end = start;
    while end < chars.len() && is_name_char(chars[end]) {
        end += 1;
    }
    let name = chars.get(start..end).map(|run| run.iter().collect()).unwrap_or_default();
    (name, end)
}

/// Reads `:name` or `:name(argument)` starting at the colon
fn read_pseudo_clause(chars: &[char], start: usize) -> Option<(PseudoClause, usize)> {
    let name_start = start + 1;
    let mut i = name_start;
    while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name: String = chars[name_start..i].iter().collect();

    let mut argument = String::new();
    if chars.get(i) == Some(&'(') {
        let close = chars[i + 1..].iter().position(|c| *c == ')')? + i + 1;
        argument = chars[i + 1..close].iter().collect::<String>().trim().to_string();
        i = close + 1;
    }

    Some((PseudoClause { name, argument }, i))
}

/// Reads one `[...]` clause starting at the opening bracket
fn read_attribute_clause(chars: &[char], start: usize) -> Option<(AttributeClause, usize)> {
    let mut depth = 0usize;
    let mut escaped = false;
    let mut close = None;

    for (offset, &c) in chars[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            ESCAPE_CHARACTER => escaped = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(start + offset);
                    break;
                }
            }
            _ => {}
        }
    }

    let close = close?;
    let body: String = chars[start + 1..close].iter().collect();
    parse_attribute_body(&body).map(|clause| (clause, close + 1))
}

/// Parses `@name`, `@name=value` or `@name<op>=value`
fn parse_attribute_body(body: &str) -> Option<AttributeClause> {
    let body = body.trim();
    let body = body.strip_prefix('@').unwrap_or(body);
    let chars: Vec<char> = body.chars().collect();

    let (name, mut i) = take_name(&chars, 0);
    if name.is_empty() {
        return None;
    }
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }

    let operator = match (chars.get(i), chars.get(i + 1)) {
        (Some('='), _) => Some((None, i + 1)),
        (Some(&modifier), Some('='))
            if !modifier.is_alphanumeric() && !modifier.is_whitespace() =>
        {
            Some((Some(modifier), i + 2))
        }
        _ => None,
    };

    let test = operator.map(|(operator, value_start)| {
        let raw: String = chars[value_start..].iter().collect();
        AttributeTest {
            operator,
            value: extract_value(raw.trim_start()),
        }
    });

    Some(AttributeClause { name, test })
}

/// Strips one surrounding quote on each side and resolves escaped
/// quote, bracket and paren characters
pub(crate) fn extract_value(raw: &str) -> String {
    let value = raw
        .strip_prefix(['\'', '"'])
        .unwrap_or(raw);
    let value = value.strip_suffix(['\'', '"']).unwrap_or(value);

    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            if let Some(&next) = chars.peek() {
                if matches!(next, '\'' | '"' | '[' | ']' | '(' | ')') {
                    unescaped.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        unescaped.push(c);
    }
    unescaped
}
