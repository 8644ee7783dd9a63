use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::parse_macro_input;

enum Markup {
	Literal(syn::LitStr),
	Block(syn::Block),
	Fragment(Vec<Markup>),
	Element(Element),
}

struct Element {
	name: syn::Ident,
	attributes: Vec<Attribute>,
	children: Vec<Markup>,
	self_closing: bool,
}

struct Attribute {
	name: String,
	value: AttributeValue,
}

enum AttributeValue {
	Literal(syn::LitStr),
	Block(syn::Block),
}

fn at_closing_tag(input: ParseStream) -> bool {
	input.peek(syn::Token![<]) && input.peek2(syn::Token![/])
}

fn parse_children(input: ParseStream) -> syn::Result<Vec<Markup>> {
	let mut children = Vec::new();
	while !at_closing_tag(input) {
		if input.is_empty() {
			return Err(input.error("unclosed tag"));
		}
		children.push(input.parse()?);
	}
	input.parse::<syn::Token![<]>()?;
	input.parse::<syn::Token![/]>()?;
	Ok(children)
}

impl Parse for Markup {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		if input.peek(syn::LitStr) {
			input.parse().map(Markup::Literal)
		} else if input.peek(syn::token::Brace) {
			input.parse().map(Markup::Block)
		} else if input.peek(syn::Token![<]) && input.peek2(syn::Token![>]) {
			input.parse::<syn::Token![<]>()?;
			input.parse::<syn::Token![>]>()?;
			let children = parse_children(input)?;
			input.parse::<syn::Token![>]>()?;
			Ok(Markup::Fragment(children))
		} else if input.peek(syn::Token![<]) {
			input.parse().map(Markup::Element)
		} else {
			Err(input.error("expected a string literal, a block, or a tag"))
		}
	}
}

impl Parse for Element {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		input.parse::<syn::Token![<]>()?;
		let name = syn::Ident::parse_any(input)?;
		let mut attributes = Vec::new();
		while !(input.peek(syn::Token![>]) || input.peek(syn::Token![/])) {
			attributes.push(input.parse()?);
		}
		let self_closing = input.peek(syn::Token![/]);
		if self_closing {
			input.parse::<syn::Token![/]>()?;
			input.parse::<syn::Token![>]>()?;
			return Ok(Element {
				name,
				attributes,
				children: Vec::new(),
				self_closing,
			});
		}
		input.parse::<syn::Token![>]>()?;
		let children = parse_children(input)?;
		let close_name = syn::Ident::parse_any(input)?;
		if close_name != name {
			return Err(syn::Error::new(
				close_name.span(),
				format!("expected </{}>", name),
			));
		}
		input.parse::<syn::Token![>]>()?;
		Ok(Element {
			name,
			attributes,
			children,
			self_closing,
		})
	}
}

impl Parse for Attribute {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let segments = syn::punctuated::Punctuated::<syn::Ident, syn::Token![-]>::parse_separated_nonempty_with(
			input,
			syn::Ident::parse_any,
		)?;
		let name = segments
			.iter()
			.map(|segment| segment.to_string())
			.collect::<Vec<_>>()
			.join("-");
		input.parse::<syn::Token![=]>()?;
		let value = if input.peek(syn::LitStr) {
			AttributeValue::Literal(input.parse()?)
		} else {
			AttributeValue::Block(input.parse()?)
		};
		Ok(Attribute { name, value })
	}
}

impl quote::ToTokens for Markup {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		let code = match self {
			Markup::Literal(literal) => quote! { ::html::Node::from(#literal) },
			Markup::Block(block) => quote! { ::html::Node::from(#block) },
			Markup::Fragment(children) => quote! {
				::html::Node::Fragment(::html::FragmentNode {
					children: vec![#(#children),*],
				})
			},
			Markup::Element(element) => quote! { #element },
		};
		code.to_tokens(tokens);
	}
}

impl quote::ToTokens for Element {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		let name = self.name.unraw().to_string();
		let attributes = self.attributes.iter().map(|attribute| {
			let name = &attribute.name;
			let value = match &attribute.value {
				AttributeValue::Literal(literal) => quote! { #literal },
				AttributeValue::Block(block) => quote! { #block },
			};
			quote! { (#name, ::html::AttributeValue::from(#value)) }
		});
		let children = &self.children;
		let self_closing = self.self_closing;
		let code = quote! {
			::html::Node::Element(::html::ElementNode {
				name: #name,
				attributes: vec![#(#attributes),*],
				children: vec![#(#children),*],
				self_closing: #self_closing,
			})
		};
		code.to_tokens(tokens);
	}
}

#[proc_macro]
pub fn html(input: TokenStream) -> TokenStream {
	let markup = parse_macro_input!(input as Markup);
	quote!(#markup).into()
}
