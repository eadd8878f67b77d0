//! Fixtures shared by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::classify::ProgressSink;
use crate::error::{Error, Result};
use crate::llm::LLMProvider;

pub(crate) fn build_xlsx<F>(fill: F) -> Vec<u8>
where
    F: FnOnce(&mut Worksheet) -> std::result::Result<(), XlsxError>,
{
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    fill(worksheet).expect("fill worksheet");
    workbook.save_to_buffer().expect("save workbook")
}

/// Taxonomy workbook laid out like the real dictionary: a title, a header on
/// row 5, data from row 6 in columns B–F. Empty strings are left as missing cells.
pub(crate) fn taxonomy_xlsx(rows: &[[&str; 5]]) -> Vec<u8> {
    build_xlsx(|ws| {
        ws.write_string(0, 0, "コスト分類辞書")?;
        for (col, header) in ["Lv1#", "Lv1name", "Lv2#", "Lv2name", "説明"].iter().enumerate() {
            ws.write_string(4, col as u16 + 1, *header)?;
        }
        for (i, row) in rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    ws.write_string(i as u32 + 5, col as u16 + 1, *value)?;
                }
            }
        }
        Ok(())
    })
}

type Responder = Box<dyn Fn(&str) -> Result<String> + Send + Sync>;

/// Call-counting provider with a scripted reply.
pub(crate) struct StubProvider {
    respond: Responder,
    calls: AtomicUsize,
    exchanges: Mutex<Vec<(String, String)>>,
}

impl StubProvider {
    pub(crate) fn with<F>(respond: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            calls: AtomicUsize::new(0),
            exchanges: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn replying(reply: &str) -> Self {
        let reply = reply.to_string();
        Self::with(move |_| Ok(reply.clone()))
    }

    pub(crate) fn failing(message: &str) -> Self {
        let message = message.to_string();
        Self::with(move |_| Err(Error::LLMApi(message.clone())))
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_exchange(&self) -> Option<(String, String)> {
        self.exchanges.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LLMProvider for StubProvider {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.exchanges
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        (self.respond)(prompt)
    }

    fn model(&self) -> &str {
        "stub-model"
    }

    fn name(&self) -> &str {
        "Stub"
    }
}

pub(crate) struct NoProgress;

impl ProgressSink for NoProgress {
    fn report_progress(&self, _fraction: f64) {}
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    values: Mutex<Vec<f64>>,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn values(&self) -> Vec<f64> {
        self.values.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingSink {
    fn report_progress(&self, fraction: f64) {
        self.values.lock().unwrap().push(fraction);
    }
}
