use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Expr, Token};

/// A single channel of a model along with the range declared for it.
struct ChannelSpec {
    ident: syn::Ident,
    min: Expr,
    max: Expr,
    wraps: bool,
}

/// Expand a struct declaration into a color model.
///
/// Every field must carry a `#[range(min, max)]` attribute, or
/// `#[range(min, max, wrap)]` for channels that wrap around (hue).
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    match expand(&mut input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &mut syn::ItemStruct) -> syn::Result<proc_macro2::TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Models can not be generic.",
        ));
    }

    if !(3..=4).contains(&input.fields.len()) {
        return Err(syn::Error::new_spanned(
            &input.fields,
            "Models must have 3 or 4 fields, one for each channel of the color.",
        ));
    }

    let struct_name = input.ident.clone();

    let channels = match input.fields {
        syn::Fields::Named(ref mut named) => named
            .named
            .iter_mut()
            .map(parse_channel)
            .collect::<syn::Result<Vec<_>>>()?,
        _ => {
            return Err(syn::Error::new_spanned(
                &struct_name,
                "Model channels must be named.",
            ))
        }
    };

    // All channels are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input.attrs.extend(syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    })?);

    let count = channels.len();
    let idents: Vec<_> = channels.iter().map(|c| &c.ident).collect();
    let names: Vec<_> = idents.iter().map(|i| i.to_string()).collect();
    let mins: Vec<_> = channels.iter().map(|c| &c.min).collect();
    let maxs: Vec<_> = channels.iter().map(|c| &c.max).collect();
    let wraps: Vec<_> = channels.iter().map(|c| c.wraps).collect();
    let indices: Vec<_> = (0..count).collect();

    Ok(quote! {
        #input

        impl #struct_name {
            /// Create a new color with the given channel values.
            pub const fn new(#(#idents: crate::Component),*) -> Self {
                Self { #(#idents),* }
            }

            /// Return the channels in declaration order.
            pub fn to_array(&self) -> [crate::Component; #count] {
                [#(self.#idents),*]
            }

            /// Return a new color with each channel mapped with the given
            /// function.
            pub fn map(&self, f: impl Fn(crate::Component) -> crate::Component) -> Self {
                Self { #(#idents: f(self.#idents)),* }
            }
        }

        impl crate::models::Channels for #struct_name {
            const CHANNELS: &'static [crate::models::ChannelRange] = &[
                #(crate::models::ChannelRange {
                    name: #names,
                    min: #mins,
                    max: #maxs,
                    wraps: #wraps,
                }),*
            ];

            fn clamped(&self) -> Self {
                Self {
                    #(#idents: crate::math::fit_channel(self.#idents, #mins, #maxs, #wraps)),*
                }
            }

            fn validate(&self) -> Result<(), crate::Error> {
                #(crate::math::check_channel(
                    <Self as crate::color::HasSpace>::SPACE,
                    #names,
                    self.#idents,
                    #mins,
                    #maxs,
                    #wraps,
                )?;)*
                Ok(())
            }
        }

        impl ::std::ops::Index<usize> for #struct_name {
            type Output = crate::Component;

            fn index(&self, index: usize) -> &crate::Component {
                match index {
                    #(#indices => &self.#idents,)*
                    _ => panic!(
                        "channel index {} out of range for {}",
                        index,
                        stringify!(#struct_name)
                    ),
                }
            }
        }

        impl ::std::ops::IndexMut<usize> for #struct_name {
            fn index_mut(&mut self, index: usize) -> &mut crate::Component {
                match index {
                    #(#indices => &mut self.#idents,)*
                    _ => panic!(
                        "channel index {} out of range for {}",
                        index,
                        stringify!(#struct_name)
                    ),
                }
            }
        }

        impl From<[crate::Component; #count]> for #struct_name {
            fn from(value: [crate::Component; #count]) -> Self {
                let [#(#idents),*] = value;
                Self { #(#idents),* }
            }
        }

        impl From<#struct_name> for [crate::Component; #count] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }
    })
}

/// Strip the `#[range(..)]` attribute from a field and parse it.
fn parse_channel(field: &mut syn::Field) -> syn::Result<ChannelSpec> {
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(&*field, "Model channels must be named."));
    };

    let Some(position) = field.attrs.iter().position(|a| a.path().is_ident("range")) else {
        return Err(syn::Error::new_spanned(
            &ident,
            "missing #[range(min, max)] attribute",
        ));
    };
    let attr = field.attrs.remove(position);

    let mut args = attr
        .parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)?
        .into_iter();

    let (Some(min), Some(max)) = (args.next(), args.next()) else {
        return Err(syn::Error::new_spanned(
            &attr,
            "expected #[range(min, max)] or #[range(min, max, wrap)]",
        ));
    };

    let wraps = match args.next() {
        None => false,
        Some(Expr::Path(ref p)) if p.path.is_ident("wrap") => true,
        Some(other) => return Err(syn::Error::new_spanned(other, "expected `wrap`")),
    };

    if let Some(extra) = args.next() {
        return Err(syn::Error::new_spanned(extra, "unexpected range argument"));
    }

    Ok(ChannelSpec {
        ident,
        min,
        max,
        wraps,
    })
}
