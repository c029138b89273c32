//! Line decoders and the block-id dispatch registry.
//!
//! Each decoder owns the sender side of its typed row channel and nothing
//! else; parse workers depend only on the [`Decoder`] trait. Block
//! orchestrators register exactly the decoders their feed needs, so a block
//! never sees channels it does not use.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::{ErrorKind, FeedError, FeedResult};
use crate::parse::Fields;

mod deal;
mod master;
mod region;

pub use deal::*;
pub use master::*;
pub use region::*;

/// One input file to be parsed. Created when a block orchestrator enumerates
/// matched files and consumed by exactly one parse worker.
#[derive(Debug, Clone)]
pub struct FileJob {
    pub path: PathBuf,
    pub name: String,
}

impl FileJob {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        FileJob { path, name }
    }
}

/// Decodes one delimited line into one typed staging record and emits it on
/// the capability the decoder holds.
#[async_trait]
pub trait Decoder: Send + Sync {
    async fn handle(
        &self,
        fields: &Fields<'_>,
        line_no: i64,
        job: &FileJob,
        process_id: &str,
    ) -> FeedResult<()>;
}

/// Map of block id → decoder. Lines whose leading field is not registered
/// are skipped silently by the parse workers.
#[derive(Default)]
pub struct DecoderRegistry {
    handlers: HashMap<&'static str, Arc<dyn Decoder>>,
}

impl DecoderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a decoder for a block id, replacing any previous entry.
    pub fn register(&mut self, block_id: &'static str, decoder: Arc<dyn Decoder>) {
        self.handlers.insert(block_id, decoder);
    }

    pub fn get(&self, block_id: &str) -> Option<&Arc<dyn Decoder>> {
        self.handlers.get(block_id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Sends a decoded record, mapping a closed channel to a decoder error.
pub(crate) async fn send_row<R: Send>(
    out: &mpsc::Sender<R>,
    block: &'static str,
    record: R,
) -> FeedResult<()> {
    out.send(record).await.map_err(|_| {
        FeedError::new(ErrorKind::RowChannelClosed {
            block: block.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::CustomerGroup;

    #[tokio::test]
    async fn registry_dispatches_by_block_id() {
        let (tx, mut rx) = mpsc::channel::<CustomerGroup>(4);
        let mut registry = DecoderRegistry::new();
        registry.register("02", Arc::new(CustomerGroupDecoder::new(tx)));

        assert!(registry.get("02").is_some());
        assert!(registry.get("99").is_none());

        let job = FileJob::new(PathBuf::from("/in/001_MCUSTGRP.txt"));
        let fields = Fields::split("02|MCUSTGRP|G1|General Trade");
        registry
            .get("02")
            .unwrap()
            .handle(&fields, 1, &job, "pid-1")
            .await
            .unwrap();

        let row = rx.recv().await.unwrap();
        assert_eq!(row.groupout, "G1");
        assert_eq!(row.groupname, "General Trade");
        assert_eq!(row.core_filename, "001_MCUSTGRP.txt");
    }

    #[tokio::test]
    async fn send_into_closed_channel_is_an_error() {
        let (tx, rx) = mpsc::channel::<CustomerGroup>(1);
        drop(rx);
        let decoder = CustomerGroupDecoder::new(tx);

        let job = FileJob::new(PathBuf::from("x.txt"));
        let fields = Fields::split("02|MCUSTGRP|G1|General Trade");
        let err = decoder.handle(&fields, 1, &job, "pid").await.unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::RowChannelClosed { .. }));
    }
}
