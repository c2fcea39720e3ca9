pub mod ast;
pub mod convert;
pub mod helpers;
pub mod qualifier;
pub mod string;
