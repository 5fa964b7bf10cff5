mod args;
mod calendario;
mod error;
mod gerador;
mod metadata;
mod regex;

pub use self::{args::*, calendario::*, error::*, gerador::*, metadata::*, regex::*};
