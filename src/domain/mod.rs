// Domain layer - trend documents, markup and locale strings
pub mod locale;
pub mod markup;
pub mod trends;
