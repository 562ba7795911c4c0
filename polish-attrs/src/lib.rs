mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `polish_error::ErrorKind` trait for the given struct.
///
/// The information of the error is given with the `error` attribute, by adding the corresponding
/// tags to it:
///
/// ```ignore
/// use polish_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of input", labels = ["add an operand here"])]
/// pub struct UnexpectedEof;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An array of label texts, one for each span of the error, in order.           |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression. `message` and `help` must evaluate to something that
/// implements [`ToString`]; `labels` must evaluate to something iterable over such values. The
/// expressions are evaluated inside a method of the struct, so fields can be accessed with
/// `self.field`.
///
/// Labels without a matching span are not shown. The generated code refers to the `ariadne` and
/// `polish_error` crates by name, so both must be dependencies of the crate using the derive.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl polish_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
