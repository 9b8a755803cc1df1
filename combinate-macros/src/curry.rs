//! Implementation of the `curry!` procedural macro.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `curry!(|a, b| body)`
//! 2. Function + arity form: `curry!(function, arity)`
//!
//! # Binding Order
//!
//! The generated chain binds arguments from the **last** parameter to the
//! first. The first call supplies the last positional argument and the final
//! call supplies the first one, so configuration-like trailing parameters can
//! be fixed early while the subject is passed last.
//!
//! # Generated Code Structure
//!
//! For `curry!(divide, 2)`, the macro generates:
//!
//! ```text
//! {
//!     let __combinate_function = Rc::new(divide);
//!     move |__combinate_argument_1| {
//!         let __combinate_function = Rc::clone(&__combinate_function);
//!         let __combinate_argument_1 = Rc::new(__combinate_argument_1);
//!         move |__combinate_argument_0| {
//!             __combinate_function(
//!                 __combinate_argument_0,
//!                 Rc::unwrap_or_clone(Rc::clone(&__combinate_argument_1)),
//!             )
//!         }
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Expr, ExprClosure, spanned::Spanned};

use crate::arguments::{parse_arity, parse_expressions};

enum CurryInput {
    Closure(ExprClosure),
    FunctionWithArity { function: Expr, arity: usize },
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    let expanded = match parse_curry_input(input) {
        Ok(CurryInput::Closure(closure)) => generate_curry_from_closure(&closure),
        Ok(CurryInput::FunctionWithArity { function, arity }) => {
            generate_nested_closures(arity, &quote! { #function })
        }
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn parse_curry_input(input: TokenStream) -> syn::Result<CurryInput> {
    let mut expressions = parse_expressions(input)?.into_iter();

    match (expressions.next(), expressions.next(), expressions.next()) {
        (Some(Expr::Closure(closure)), None, None) => Ok(CurryInput::Closure(closure)),
        (Some(Expr::Path(path)), None, None) => Err(syn::Error::new(
            path.span(),
            "curry! with a function name requires an arity: curry!(function_name, 2)",
        )),
        (Some(function), Some(arity), None) => {
            let arity = parse_arity(&arity, "curry!")?;
            if arity < 2 {
                return Err(syn::Error::new(
                    function.span(),
                    "curry! requires a function with at least 2 arguments",
                ));
            }
            Ok(CurryInput::FunctionWithArity { function, arity })
        }
        _ => Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "curry! requires a closure or a function with an arity",
        )),
    }
}

fn generate_curry_from_closure(closure: &ExprClosure) -> TokenStream2 {
    let argument_count = closure.inputs.len();

    if argument_count < 2 {
        return syn::Error::new(
            closure.span(),
            "curry! requires a function with at least 2 arguments",
        )
        .to_compile_error();
    }

    generate_nested_closures(argument_count, &quote! { #closure })
}

fn generate_nested_closures(argument_count: usize, function_expression: &TokenStream2) -> TokenStream2 {
    let argument_identifiers: Vec<_> = (0..argument_count)
        .map(|index| quote::format_ident!("__combinate_argument_{}", index))
        .collect();

    // Only the first parameter arrives in the innermost closure; every other
    // one was captured by an enclosing closure and is shared through `Rc`.
    let final_arguments: Vec<_> = argument_identifiers
        .iter()
        .enumerate()
        .map(|(index, identifier)| {
            if index == 0 {
                quote! { #identifier }
            } else {
                quote! {
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#identifier))
                }
            }
        })
        .collect();

    let function_call = quote! { __combinate_function(#(#final_arguments),*) };

    let closure_chain = build_closure_chain(&argument_identifiers, function_call);

    quote! {
        {
            let __combinate_function = ::std::rc::Rc::new(#function_expression);
            #closure_chain
        }
    }
}

fn build_closure_chain(
    argument_identifiers: &[proc_macro2::Ident],
    innermost_body: TokenStream2,
) -> TokenStream2 {
    let mut current_body = innermost_body;

    for (index, identifier) in argument_identifiers.iter().enumerate() {
        current_body = if index == 0 {
            quote! {
                move |#identifier| { #current_body }
            }
        } else {
            let already_bound: Vec<_> = argument_identifiers[index + 1..]
                .iter()
                .map(|bound_identifier| {
                    quote! {
                        let #bound_identifier = ::std::rc::Rc::clone(&#bound_identifier);
                    }
                })
                .collect();

            quote! {
                move |#identifier| {
                    let __combinate_function = ::std::rc::Rc::clone(&__combinate_function);
                    #(#already_bound)*
                    let #identifier = ::std::rc::Rc::new(#identifier);
                    #current_body
                }
            }
        };
    }

    current_body
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(5)]
    fn chain_nests_one_closure_per_argument(#[case] arity: usize) {
        let generated = generate_nested_closures(arity, &quote! { function }).to_string();
        assert_eq!(generated.matches("move |").count(), arity);
    }

    #[rstest]
    fn outermost_closure_binds_last_argument() {
        let generated = generate_nested_closures(3, &quote! { function }).to_string();
        let position = |name: &str| generated.find(name);
        assert!(position("__combinate_argument_2") < position("__combinate_argument_1"));
        assert!(position("__combinate_argument_1") < position("__combinate_argument_0"));
    }
}
