use proc_macro::TokenStream;

mod escape_table;

/// Generate a 256-entry replacement table for escaping ASCII bytes. Every
/// listed byte maps to its replacement text and every other byte maps to
/// `None`. The table is assigned to a new `pub(crate)` static named
/// `<NAME>_ESCAPE_TABLE`.
///
/// ```ignore
/// generate_escape_table! {
///     HTML_TEXT,
///     b'&' => "&amp;",
///     b'<' => "&lt;",
/// }
/// ```
///
/// Only ASCII bytes may be listed, since replacing any other byte could split
/// a UTF-8 sequence. Listing the same byte twice is a compile error.
#[proc_macro]
pub fn generate_escape_table(input: TokenStream) -> TokenStream {
    escape_table::generate_escape_table_impl(input)
}
