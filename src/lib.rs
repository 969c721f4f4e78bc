pub mod agent;
pub mod config;
pub mod error;
pub mod graph;
pub mod report;
pub mod search;

pub use agent::{diagnose, AgentEvent, Diagnosis, DiagnosticAgent, Reporter, Verdict};
pub use config::Config;
pub use error::{KbdiagError, Result};
pub use graph::{load_knowledge_base, KnowledgeBase, ANEMIA};
pub use search::{search_bfs, search_dfs, SearchFn, SearchOutcome, Strategy};
