//! Case transformations for artifact names.
//!
//! All functions are pure and operate on `char`s using Unicode case mappings
//! that do not depend on the process locale, so the same input always yields
//! the same output on every machine.
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`capitalize_first`] | `createOrder` | `CreateOrder` |
//! | [`decapitalize_first`] | `OrderService` | `orderService` |
//! | [`camel_to_snake`] | `createOrder` | `create_order` |
//! | [`split_before_first_uppercase`] | `createOrderCommand` | `create` |

/// Upper-case the first character, leaving the rest untouched.
///
/// An empty input yields an empty string.  The upper-case mapping of a single
/// character may expand (`ß` becomes `SS`).
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character, leaving the rest untouched.
///
/// Used to derive a field name from a type name (`OrderFacade` -> `orderFacade`).
pub fn decapitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert `camelCase` / `PascalCase` to `snake_case`.
///
/// Every ASCII upper-case letter is replaced by `_` followed by its lower-case
/// form.  The first character gets no special treatment, so a leading capital
/// produces a leading underscore: `Order` -> `_order`, `ORDER` -> `_o_r_d_e_r`.
pub fn camel_to_snake(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Return everything before the first upper-case letter.
///
/// A character counts as upper-case when it is its own upper-case mapping and
/// differs from its lower-case mapping, i.e. cased letters only; digits and
/// punctuation never stop the scan.  Without such a character the whole input
/// is returned.
pub fn split_before_first_uppercase(s: &str) -> &str {
    match s.char_indices().find(|&(_, c)| is_upper_letter(c)) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn is_upper_letter(c: char) -> bool {
    c.to_uppercase().eq(std::iter::once(c)) && !c.to_lowercase().eq(std::iter::once(c))
}
