use proc_macro2::TokenStream;
use quote::quote_spanned;
use syn::{Error, LitStr};

pub fn parse_hex(arg: LitStr) -> Result<TokenStream, Error> {
    let span = arg.span();
    let input = arg.value();
    let mut output: Vec<u8> = Vec::with_capacity(input.len() / 2);
    let mut high: Option<u8> = None;

    for (i, c) in input.char_indices() {
        if c.is_ascii_whitespace() {
            if high.is_some() {
                return Err(Error::new(
                    span,
                    format!("hexadecimal pair is split by whitespace at offset {i}"),
                ));
            }

            continue;
        }

        let digit = match c.to_digit(16) {
            Some(v) => v as u8,
            None => {
                return Err(Error::new(
                    span,
                    format!("unexpected character {c:?} at offset {i}"),
                ));
            }
        };

        match high.take() {
            Some(h) => output.push((h << 4) | digit),
            None => high = Some(digit),
        }
    }

    if high.is_some() {
        return Err(Error::new(span, "the literal ends with an incomplete pair"));
    }

    Ok(quote_spanned!(span=> {
        const DATA: &[u8] = &[#(#output),*];
        DATA
    }))
}
