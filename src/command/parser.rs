//! Command line tokenization
//!
//! Lines split on single spaces; runs of spaces collapse because empty
//! tokens are discarded. There is no quoting or escaping, so arguments can
//! never contain a space.

/// One parsed command line.
///
/// `name` is the first token uppercased for case-insensitive dispatch;
/// `args` are the remaining tokens in wire order with their original case,
/// since some arguments (passwords) are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// Uppercased command name
    pub name: String,
    /// Argument tokens, original case
    pub args: Vec<&'a str>,
}

/// Parse a command line, terminator already stripped.
///
/// Returns `None` when the line contains no tokens; the caller replies
/// with a syntax error in that case.
///
/// # Examples
/// ```
/// use nntp_daemon::command::parse;
///
/// let cmd = parse("mode  READER").unwrap();
/// assert_eq!(cmd.name, "MODE");
/// assert_eq!(cmd.args, vec!["READER"]);
///
/// assert!(parse("   ").is_none());
/// ```
#[must_use]
pub fn parse(line: &str) -> Option<ParsedCommand<'_>> {
    let mut tokens = line.split(' ').filter(|t| !t.is_empty());
    let name = tokens.next()?.to_ascii_uppercase();
    let args = tokens.collect();
    Some(ParsedCommand { name, args })
}
