//! Attribute macro behind `#[htmlgen_testhelpers::test]`.

use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    // attributes, visibility and qualifiers ahead of `fn`
    struct Prelude {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    // generics, arguments, return type and where clause
    struct Signature {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct Body {
        items: BraceGroup,
    }

    struct TestFn {
        prelude: Prelude, _fn: KFn, name: Ident,
        signature: Signature, body: Body
    }
}

impl quote::ToTokens for Prelude {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Signature {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Body {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        tokens.extend(self.items.0.stream())
    }
}

/// Test attribute that installs the tracing subscriber before the body runs.
///
/// # Usage
///
/// ```ignore
/// #[htmlgen_testhelpers::test]
/// fn renders() {
///     // tracing output is visible here
/// }
/// ```
///
/// A different test attribute can be passed as the argument:
///
/// ```ignore
/// #[htmlgen_testhelpers::test(tokio::test)]
/// async fn renders_async() {}
/// ```
///
/// Anything that is not a function with a body is rejected with a
/// `compile_error!`.
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut tokens = item.to_token_iter();
    let Ok(TestFn {
        prelude,
        _fn,
        name,
        signature,
        body,
    }) = tokens.parse::<TestFn>()
    else {
        return quote::quote! {
            ::core::compile_error!("#[htmlgen_testhelpers::test] expects a function with a body");
        }
        .into();
    };

    let test_attr = if attr.is_empty() {
        quote::quote! { #[::core::prelude::rust_2024::test] }
    } else {
        let attr = TokenStream::from(attr);
        quote::quote! { #[#attr] }
    };

    quote::quote! {
        #test_attr
        #prelude fn #name #signature {
            ::htmlgen_testhelpers::setup();

            #body
        }
    }
    .into()
}
