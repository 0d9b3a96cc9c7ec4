use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Expr, ExprLit, Fields, Lit, Meta, Variant, parse_macro_input};

/// 单个枚举值的帮助信息。
struct VariantHelp {
    pattern: TokenStream2,
    name: String,
    cmd: String,
    doc: String,
}

impl VariantHelp {
    fn new(variant: &Variant) -> Self {
        let ident = &variant.ident;
        let pattern = match &variant.fields {
            Fields::Unit => quote! { Self::#ident },
            Fields::Unnamed(_) => quote! { Self::#ident(..) },
            Fields::Named(_) => quote! { Self::#ident { .. } },
        };
        let doc = doc_of(&variant.attrs);
        // 文档首个单词即命令名，例如`:range`
        let cmd = doc.split_whitespace().next().unwrap_or_default().to_string();
        VariantHelp { pattern, name: ident.to_string(), cmd, doc }
    }
}

/// 提取文档注释，每行去掉`///`后紧跟的一个空格。
fn doc_of(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(str::to_string).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 根据枚举值的文档注释生成帮助信息：
///  - `cmd(&self)`：当前值对应的命令名，即文档的首个单词；
///  - `all_help()`：全部`(枚举名, 帮助信息)`。
#[proc_macro_derive(CmdHelp)]
pub fn cmd_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(enum_name, "CmdHelp can only be derived on enums").to_compile_error().into();
    };
    let helps = variants.iter().map(VariantHelp::new).collect::<Vec<_>>();

    let cmd_arms = helps.iter().map(|h| {
        let (pattern, cmd) = (&h.pattern, &h.cmd);
        quote! { #pattern => #cmd, }
    });
    let all_entries = helps.iter().map(|h| {
        let (name, doc) = (&h.name, &h.doc);
        quote! { (#name, #doc) }
    });

    let expanded = quote! {
        #[allow(dead_code)]
        impl #enum_name {
            /// 获取命令名。
            pub fn cmd(&self) -> &'static str {
                match self {
                    #(#cmd_arms)*
                }
            }

            /// 获取全部帮助信息：[(name, help), ...]
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[
                    #(#all_entries),*
                ]
            }
        }
    };

    TokenStream::from(expanded)
}
