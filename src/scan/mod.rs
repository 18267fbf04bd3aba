pub mod html;
pub mod lexer;

pub use html::{find_tags, HtmlTag};
pub use lexer::{mask_comments, scan, Token, TokenKind};
