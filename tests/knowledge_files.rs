use kbdiag::report::ConsoleReporter;
use kbdiag::{load_knowledge_base, DiagnosticAgent, KnowledgeBase, Strategy};
use std::path::Path;

fn shipped(name: &str) -> KnowledgeBase {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("knowledge").join(name);
    load_knowledge_base(&path).unwrap()
}

#[test]
fn shipped_files_match_built_in_graph() {
    let built_in = KnowledgeBase::anemia();
    assert_eq!(shipped("anemia.kb"), built_in);
    assert_eq!(shipped("anemia.json"), built_in);
}

#[test]
fn demo_cases_on_loaded_graph() {
    let kb = shipped("anemia.kb");
    let mut reporter = ConsoleReporter::new(Vec::new());

    let bfs = DiagnosticAgent::new(&kb, Strategy::Bfs);
    assert!(bfs.diagnose(&["Palidez"], &mut reporter).is_positive());
    assert!(!bfs.diagnose(&["Sangrado nasal"], &mut reporter).is_positive());

    let dfs = DiagnosticAgent::new(&kb, Strategy::Dfs);
    assert!(dfs.diagnose(&["Palidez"], &mut reporter).is_positive());
    let diagnosis = dfs.diagnose(&["Unas quebradizas"], &mut reporter);
    assert_eq!(
        diagnosis.path(),
        ["Unas quebradizas", "Bajo consumo (carne/pescado)", "Anemia"].map(String::from)
    );

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(out.matches("--- Final diagnosis (BFS) ---").count(), 2);
    assert_eq!(out.matches("--- Final diagnosis (DFS) ---").count(), 2);
    assert_eq!(out.matches("Result: patient does not have Anemia").count(), 1);
}
