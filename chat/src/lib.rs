use anyhow::Result;
use pdfqa_core::format::format_results;
use pdfqa_core::guard::{needs_disclaimer, DISCLAIMER};
use pdfqa_core::{KnowledgeBase, Passage, PdfBackend};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Skip,
    Quit,
    Reload,
    Query(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let q = line.trim();
        if q.is_empty() {
            return Command::Skip;
        }
        match q.to_lowercase().as_str() {
            "quit" | "exit" => Command::Quit,
            "reload" => Command::Reload,
            _ => Command::Query(q.to_string()),
        }
    }
}

pub fn banner(folder: &Path) -> String {
    format!(
        "Finance PDF Chat (no LLM, no calculations).\n\
         Folder: {}\n\
         - I ONLY answer using text found in your PDFs.\n\
         - Type 'reload' after adding/replacing PDFs to refresh.\n\
         - Type 'quit' to exit.\n",
        folder.display()
    )
}

/// Disclaimer (when the query asks for a calculation) followed by the results.
pub fn answer<B: PdfBackend>(kb: &KnowledgeBase<B>, query: &str, k: usize) -> String {
    let hits = kb.search(query, k);
    let body = format_results(&hits);
    if needs_disclaimer(query) {
        format!("{DISCLAIMER}\n\n{body}")
    } else {
        body
    }
}

/// Read queries from `input` until EOF or `quit`, answering each on `out`.
pub fn run<B, R, W>(kb: &KnowledgeBase<B>, input: R, out: &mut W) -> Result<()>
where
    B: PdfBackend,
    R: BufRead,
    W: Write,
{
    let k = kb.settings().top_k;
    writeln!(out, "{}", banner(&kb.settings().folder))?;
    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out, "\nbye!")?;
            break;
        };
        match Command::parse(&line?) {
            Command::Skip => continue,
            Command::Quit => break,
            Command::Reload => match kb.reload() {
                Ok(report) => {
                    for w in &report.skipped {
                        writeln!(out, "{w}")?;
                    }
                    writeln!(out, "Reloaded. Passages: {}", report.passages)?;
                }
                Err(err) => {
                    tracing::error!(error = %err, "reload failed");
                    writeln!(out, "Reload failed: {err:#}. Keeping {} passages.", kb.passage_count())?;
                }
            },
            Command::Query(q) => writeln!(out, "{}", answer(kb, &q, k))?,
        }
    }
    Ok(())
}

#[derive(Serialize)]
pub struct AskResponse<'a> {
    pub query: &'a str,
    pub disclaimer: Option<&'static str>,
    pub total_passages: usize,
    pub took_s: f64,
    pub results: Vec<AskHit>,
}

#[derive(Serialize)]
pub struct AskHit {
    pub score: f64,
    #[serde(flatten)]
    pub passage: Passage,
}

/// Single query as a JSON document.
pub fn ask_json<B: PdfBackend>(kb: &KnowledgeBase<B>, query: &str, k: usize) -> Result<String> {
    let start = Instant::now();
    let results: Vec<AskHit> =
        kb.search(query, k).into_iter().map(|h| AskHit { score: h.score, passage: h.passage }).collect();
    let resp = AskResponse {
        query,
        disclaimer: needs_disclaimer(query).then_some(DISCLAIMER),
        total_passages: kb.passage_count(),
        took_s: start.elapsed().as_secs_f64(),
        results,
    };
    Ok(serde_json::to_string_pretty(&resp)?)
}
