//! Path template parsing and substitution.
//!
//! Templates mark parameters with a leading colon: `/resource/:id/action` has
//! a single parameter named `id`. Parameter names are runs of ASCII letters,
//! digits and underscores.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::BuildHasher;
use std::sync::OnceLock;

use regex::{Captures, Regex};

fn param_regex() -> &'static Regex {
    static PARAM: OnceLock<Regex> = OnceLock::new();
    PARAM.get_or_init(|| Regex::new(r":([A-Za-z0-9_]+)").unwrap())
}

/// Fills the named parameters of `template` with values from `args`.
///
/// Parameters without a value are left in their original state.
///
/// # Examples
///
/// ```
/// use resource_routes_http::urls::template::fill_string;
/// use std::collections::HashMap;
///
/// let mut args = HashMap::new();
/// args.insert("id", 1);
/// assert_eq!(
///     fill_string("/resource/:id/action/:extra", &args),
///     "/resource/1/action/:extra"
/// );
/// ```
pub fn fill_string<V: Display, S: BuildHasher>(
    template: &str,
    args: &HashMap<&str, V, S>,
) -> String {
    param_regex()
        .replace_all(template, |caps: &Captures<'_>| {
            args.get(&caps[1])
                .map_or_else(|| caps[0].to_string(), ToString::to_string)
        })
        .into_owned()
}

/// Fills parameter occurrences of `template` by position.
///
/// The n-th placeholder occurrence receives `args[n]`, whatever its name, so a
/// name repeated in the template consumes one argument per occurrence.
/// Surplus arguments are ignored; occurrences past the end of `args` are left
/// untouched.
///
/// # Examples
///
/// ```
/// use resource_routes_http::urls::template::fill_string_positional;
///
/// let args = vec!["1".to_string()];
/// assert_eq!(fill_string_positional("/:id/copy/:id", &args), "/1/copy/:id");
/// ```
pub fn fill_string_positional(template: &str, args: &[String]) -> String {
    let mut position = 0;
    param_regex()
        .replace_all(template, |caps: &Captures<'_>| {
            let value = args
                .get(position)
                .map_or_else(|| caps[0].to_string(), Clone::clone);
            position += 1;
            value
        })
        .into_owned()
}

/// Returns the parameter names in `template`, in order of appearance.
///
/// Repeated names are kept once per occurrence.
///
/// # Examples
///
/// ```
/// use resource_routes_http::urls::template::get_string_params;
///
/// assert_eq!(get_string_params("/resource/:id/action/:sub"), vec!["id", "sub"]);
/// assert!(get_string_params("/resource").is_empty());
/// ```
pub fn get_string_params(template: &str) -> Vec<String> {
    param_regex()
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}
