use fit_analyzer::processing::embeddings::SentenceEmbedder;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub const TECH_TERMS: &[&str] = &[
    "rust", "tokio", "axum", "postgresql", "kafka", "kubernetes", "terraform", "prometheus",
    "grafana", "opentelemetry", "grpc", "redis", "docker", "linux", "aws", "concurrency",
    "networking", "latency", "observability", "microservices", "serde", "clap", "async",
    "backend", "distributed", "services", "apis", "containers", "pipelines", "tracing",
];

pub const BAKERY_TERMS: &[&str] = &[
    "sourdough", "croissant", "baguette", "pastry", "dough", "oven", "flour", "yeast", "butter",
    "glaze", "brioche", "ciabatta", "knead", "proofing", "crust", "frosting", "ganache",
    "meringue", "custard", "pretzel", "scone", "muffin", "biscotti", "eclair", "macaron",
    "tart", "strudel", "focaccia", "bagel", "danish",
];

/// `count` words cycling through `terms`
pub fn repeat_terms(terms: &[&str], count: usize) -> String {
    terms.iter().cycle().take(count).copied().collect::<Vec<_>>().join(" ")
}

/// Offline stand-in for a sentence model: hashed bag of words, unit-normalized.
pub struct HashingEmbedder {
    dims: usize,
}

impl HashingEmbedder {
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl SentenceEmbedder for HashingEmbedder {
    fn encode(&self, texts: &[String]) -> Vec<Vec<f32>> {
        texts
            .iter()
            .map(|text| {
                let mut v = vec![0.0f32; self.dims];
                for word in text.split_whitespace() {
                    let mut hasher = DefaultHasher::new();
                    word.hash(&mut hasher);
                    v[(hasher.finish() as usize) % self.dims] += 1.0;
                }
                let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
                if norm > 0.0 {
                    v.iter_mut().for_each(|x| *x /= norm);
                }
                v
            })
            .collect()
    }

    fn model_name(&self) -> &str {
        "hashing-test-embedder"
    }
}

/// Build a PDF with one page per entry; empty entries become blank pages.
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let (doc, first_page, first_layer) = PdfDocument::new("resume", Mm(210.0), Mm(297.0), "Layer 1");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica).unwrap();

    for (i, text) in pages.iter().enumerate() {
        let (page, layer) = if i == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(210.0), Mm(297.0), format!("Layer {}", i + 1))
        };
        if text.is_empty() {
            continue;
        }

        let layer = doc.get_page(page).get_layer(layer);
        let words: Vec<&str> = text.split_whitespace().collect();
        for (line_no, line) in words.chunks(8).enumerate() {
            let y = 280.0 - line_no as f32 * 6.0;
            layer.use_text(line.join(" "), 10.0, Mm(10.0), Mm(y), &font);
        }
    }

    doc.save_to_bytes().unwrap()
}
