//! Regex rewriting of rendered entries

use mergelog_core::{ChangelogError, Transformer};
use regex::Regex;
use tracing::{debug, warn};

/// A transformer whose pattern compiled successfully
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Compiled pattern
    pub pattern: Regex,
    /// Replacement text in `regex` expansion syntax
    pub target: String,
}

impl CompiledRule {
    /// Compile a configured transformer.
    ///
    /// The first `\\` in the pattern is collapsed to `\` before compiling, for
    /// config formats that double-escape backslashes. Numbered references in
    /// the target are braced so `$1_pr` keeps its suffix.
    pub fn compile(transformer: &Transformer) -> Result<Self, ChangelogError> {
        let source = transformer.pattern.replacen("\\\\", "\\", 1);
        let pattern = Regex::new(&source).map_err(|source| ChangelogError::InvalidPattern {
            pattern: transformer.pattern.clone(),
            source,
        })?;

        Ok(Self {
            pattern,
            target: normalize_target(&transformer.target),
        })
    }

    /// Replace every match in `text`
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.target.as_str())
            .into_owned()
    }
}

/// Rewrite `$<digits>` to `${<digits>}` and `$&` to `${0}`.
///
/// `regex` reads `$1_pr` as the group named `1_pr`; bracing ends the
/// reference at the last digit. `$$` stays a literal dollar.
fn normalize_target(target: &str) -> String {
    let mut out = String::with_capacity(target.len());
    let mut chars = target.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('$') => {
                chars.next();
                out.push_str("$$");
            }
            Some('&') => {
                chars.next();
                out.push_str("${0}");
            }
            Some(d) if d.is_ascii_digit() => {
                out.push_str("${");
                while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                    out.push(d);
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push('$'),
        }
    }

    out
}

/// Compile every transformer, dropping the ones that fail.
///
/// Failures are logged and skipped; the remaining rules keep their order.
pub fn compile_rules(transformers: &[Transformer]) -> Vec<CompiledRule> {
    let (compiled, failed): (Vec<_>, Vec<_>) = transformers
        .iter()
        .map(CompiledRule::compile)
        .partition(Result::is_ok);

    for err in failed.into_iter().filter_map(Result::err) {
        warn!(error = %err, "dropping transformer");
    }

    let rules: Vec<CompiledRule> = compiled.into_iter().filter_map(Result::ok).collect();
    debug!(
        configured = transformers.len(),
        active = rules.len(),
        "transformers compiled"
    );
    rules
}

/// Apply rules in order, each to the output of the previous one
pub fn apply_rules(text: &str, rules: &[CompiledRule]) -> String {
    if rules.is_empty() {
        return text.to_string();
    }

    rules
        .iter()
        .fold(text.to_string(), |current, rule| rule.apply(&current))
}
