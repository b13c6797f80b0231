use proc_macro::TokenStream;
use quote::quote;
use syn::{FnArg, Ident, ItemFn, Pat, parse_macro_input, spanned::Spanned};

/// Logs the wall-clock duration of the annotated free function at debug
/// level. The caller crate must depend on `log`.
///
/// The body moves into a nested function with the same signature, so `?`
/// keeps the declared return type.
#[proc_macro_attribute]
pub fn timed(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input_fn = parse_macro_input!(item as ItemFn);

    let mut args: Vec<Ident> = Vec::new();
    for input in &input_fn.sig.inputs {
        match input {
            FnArg::Typed(pat_type) => match pat_type.pat.as_ref() {
                Pat::Ident(pat_ident) => args.push(pat_ident.ident.clone()),
                other => {
                    return syn::Error::new(other.span(), "#[timed] needs plain identifier arguments")
                        .to_compile_error()
                        .into();
                }
            },
            FnArg::Receiver(receiver) => {
                return syn::Error::new(receiver.span(), "#[timed] does not support methods")
                    .to_compile_error()
                    .into();
            }
        }
    }

    let attrs = &input_fn.attrs;
    let vis = &input_fn.vis;
    let sig = &input_fn.sig;
    let fn_name = &input_fn.sig.ident;
    let block = &input_fn.block;
    let asyncness = &input_fn.sig.asyncness;

    let mut inner_sig = input_fn.sig.clone();
    inner_sig.ident = Ident::new("__timed_inner", fn_name.span());

    let call = if asyncness.is_some() {
        quote! { __timed_inner(#(#args),*).await }
    } else {
        quote! { __timed_inner(#(#args),*) }
    };

    let expanded = quote! {
        #(#attrs)*
        #vis #sig {
            #inner_sig #block

            let __timed_start = std::time::Instant::now();
            let __timed_result = #call;
            ::log::debug!("{} took {:?}", stringify!(#fn_name), __timed_start.elapsed());
            __timed_result
        }
    };

    TokenStream::from(expanded)
}
