// Service exports
pub mod knowledge_base;

pub use knowledge_base::{KnowledgeBase, KnowledgeBaseError, KnowledgeBaseFormat};
