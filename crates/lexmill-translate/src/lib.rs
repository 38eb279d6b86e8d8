pub mod mymemory;
pub mod stage;
pub mod translator;

pub use mymemory::MyMemoryTranslator;
pub use stage::{Translated, TranslationStage, MAX_ATTEMPTS};
pub use translator::Translator;
