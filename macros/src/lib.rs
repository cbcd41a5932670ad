use proc_macro::TokenStream;
use syn::{parse_macro_input, Error, LitStr};

mod hex;

/// Decodes a string literal of hexadecimal pairs into a `&'static [u8]` at compile time.
///
/// ASCII whitespace between pairs is ignored so a captured table dump can be pasted as-is. Any
/// other character, or a pair split by whitespace, is a compile error.
#[proc_macro]
pub fn hex(arg: TokenStream) -> TokenStream {
    let arg = parse_macro_input!(arg as LitStr);

    self::hex::parse_hex(arg)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
