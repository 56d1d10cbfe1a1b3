use proc_macro::TokenStream;
use proc_macro2::Ident;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::{parse_macro_input, LitByte, LitStr, Token};

struct EscapeArm {
    byte: LitByte,
    replacement: LitStr,
}

impl Parse for EscapeArm {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if !lookahead.peek(LitByte) {
            return Err(input.error("Expected a byte literal like b'<' for an escape mapping"));
        }
        let byte = input.parse::<LitByte>()?;
        input.parse::<Token![=>]>()?;
        let replacement = input.parse::<LitStr>()?;
        Ok(Self { byte, replacement })
    }
}

struct EscapeTableInput {
    name: Ident,
    arms: Vec<EscapeArm>,
}

impl Parse for EscapeTableInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error("At least a name must be specified for an escape table"));
        }

        let name = input.parse::<Ident>()?;
        input.parse::<Token![,]>()?;
        let arms = input.parse_terminated(EscapeArm::parse, Token![,])?;

        Ok(EscapeTableInput {
            name,
            arms: arms.into_iter().collect(),
        })
    }
}

pub fn generate_escape_table_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as EscapeTableInput);

    let mut replacements: [Option<String>; 256] = [const { None }; 256];

    for EscapeArm { byte, replacement } in &input.arms {
        let value = byte.value();
        if !value.is_ascii() {
            return syn::Error::new(
                byte.span(),
                format!("byte {value} is not ASCII and cannot be replaced without breaking UTF-8"),
            )
            .to_compile_error()
            .into();
        }
        if replacements[value as usize].is_some() {
            let char_value = char::from(value);
            return syn::Error::new(
                byte.span(),
                format!("byte '{char_value}' ({value}) was given more than one replacement"),
            )
            .to_compile_error()
            .into();
        }
        replacements[value as usize] = Some(replacement.value());
    }

    let table_name = format_ident!("{}_ESCAPE_TABLE", input.name);
    let table_values = replacements.map(|value| match value {
        Some(value) => quote! { Some(#value) },
        None => quote! { None },
    });

    quote! {
        pub(crate) static #table_name: [Option<&'static str>; 256] = [
            #(#table_values),*
        ];
    }
    .into()
}
