//! Implementation of the `unsplat!` procedural macro.
//!
//! `unsplat!(function, 3)` expands to
//!
//! ```text
//! {
//!     let __combinate_function = function;
//!     move |__combinate_argument_0, __combinate_argument_1, __combinate_argument_2| {
//!         __combinate_function(vec![
//!             __combinate_argument_0,
//!             __combinate_argument_1,
//!             __combinate_argument_2,
//!         ])
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::Expr;

use crate::arguments::{parse_arity, parse_expressions};

pub fn unsplat_impl(input: TokenStream) -> TokenStream {
    let expanded = match parse_unsplat_input(input) {
        Ok((function, arity)) => generate_collecting_closure(&function, arity),
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn parse_unsplat_input(input: TokenStream) -> syn::Result<(Expr, usize)> {
    let mut expressions = parse_expressions(input)?.into_iter();

    match (expressions.next(), expressions.next(), expressions.next()) {
        (Some(function), Some(arity), None) => Ok((function, parse_arity(&arity, "unsplat!")?)),
        _ => Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "unsplat! requires a function and an arity: unsplat!(function, 3)",
        )),
    }
}

fn generate_collecting_closure(function: &Expr, arity: usize) -> TokenStream2 {
    let argument_identifiers: Vec<_> = (0..arity)
        .map(|index| quote::format_ident!("__combinate_argument_{}", index))
        .collect();

    quote! {
        {
            let __combinate_function = #function;
            move |#(#argument_identifiers),*| {
                __combinate_function(::std::vec![#(#argument_identifiers),*])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zero_arity_produces_thunk() {
        let function: Expr = syn::parse_quote!(collect);
        let generated = generate_collecting_closure(&function, 0).to_string();
        assert!(!generated.contains("__combinate_argument_0"));
        assert!(generated.contains("vec"));
    }
}
