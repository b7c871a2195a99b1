//! Message composition for user-facing text
//!
//! Error messages and the spelled-out digit words used by
//! [`Grammar::inflect_on_quantity`](crate::Grammar::inflect_on_quantity) go
//! through a [`Composer`]. The default [`PositionalComposer`] only substitutes
//! arguments; an application can inject a translating composer instead when it
//! builds its [`Grammar`](crate::Grammar).

/// Composes a message template with its arguments
pub trait Composer: Send + Sync {
    /// Compose `template`, substituting `args` into its placeholders
    fn compose(&self, template: &str, args: &[&str]) -> String;
}

impl<F> Composer for F
where
    F: Fn(&str, &[&str]) -> String + Send + Sync,
{
    fn compose(&self, template: &str, args: &[&str]) -> String {
        self(template, args)
    }
}

/// Plain printf-style positional substitution
///
/// Supports `%1$s`-style indexed placeholders, bare `%s` placeholders consumed
/// in order, and `%%` as a literal percent sign. Placeholders without a
/// matching argument are left untouched.
///
/// ```
/// use grammar::core::compose::{Composer, PositionalComposer};
///
/// let composer = PositionalComposer;
/// assert_eq!(
///     composer.compose("%2$s before %1$s", &["after", "before"]),
///     "before before after"
/// );
/// assert_eq!(composer.compose("%s and %s", &["a", "b"]), "a and b");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalComposer;

impl Composer for PositionalComposer {
    fn compose(&self, template: &str, args: &[&str]) -> String {
        let mut output = String::with_capacity(template.len());
        let mut next_arg = 0;
        let mut rest = template;

        while let Some(pos) = rest.find('%') {
            output.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            if let Some(tail) = after.strip_prefix('%') {
                output.push('%');
                rest = tail;
                continue;
            }

            if let Some(tail) = after.strip_prefix('s') {
                match args.get(next_arg) {
                    Some(arg) => output.push_str(arg),
                    None => output.push_str("%s"),
                }
                next_arg += 1;
                rest = tail;
                continue;
            }

            let digits = after.bytes().take_while(u8::is_ascii_digit).count();
            if digits > 0 && after[digits..].starts_with("$s") {
                let index: usize = after[..digits].parse().unwrap_or(0);
                match index.checked_sub(1).and_then(|i| args.get(i)) {
                    Some(arg) => output.push_str(arg),
                    None => output.push_str(&rest[pos..pos + 1 + digits + 2]),
                }
                rest = &after[digits + 2..];
                continue;
            }

            output.push('%');
            rest = after;
        }

        output.push_str(rest);
        output
    }
}
