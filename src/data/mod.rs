/// Data layer: input sources, the sample model, and line ingestion.
///
/// Architecture:
/// ```text
///   file / stdin
///        │
///        ▼
///   ┌──────────┐
///   │  source   │  SourceDescriptor → Box<dyn BufRead>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  line → trim → f64, rejects logged and skipped
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ SampleSequence │  seeded with 0.0, insertion order
///   └────────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod source;
