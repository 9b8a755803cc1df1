//! Shared parsing helpers for the function-like macros.

use proc_macro::TokenStream;
use syn::punctuated::Punctuated;
use syn::{Expr, ExprLit, Lit, Token, spanned::Spanned};

pub fn parse_expressions(input: TokenStream) -> syn::Result<Punctuated<Expr, Token![,]>> {
    let input_tokens: proc_macro2::TokenStream = input.into();
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    syn::parse::Parser::parse2(parser, input_tokens)
}

pub fn parse_arity(expression: &Expr, macro_name: &str) -> syn::Result<usize> {
    match expression {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal_integer),
            ..
        }) => literal_integer.base10_parse::<usize>(),
        other => Err(syn::Error::new(
            other.span(),
            format!("{macro_name} expected an integer literal for arity"),
        )),
    }
}
