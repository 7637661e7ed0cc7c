// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Teacher-forced training of the Seq2Seq model with Adam.
//
//   - Training runs on TrainBackend (Autodiff<..>) for gradients
//   - model.valid() strips autodiff once training is over; the
//     returned model lives on the inner backend for inference
//   - argmax(2) over the logits returns [batch, steps, 1], so we
//     squeeze the last dim before comparing with the targets
//
// There is no validation split: every epoch is a pass over the
// generated examples, and generalisation is measured afterwards
// with fresh samples and autoregressive decoding.
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::Result;
use burn::{
    data::dataloader::DataLoaderBuilder,
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
    tensor::backend::AutodiffBackend,
};

use crate::application::train_use_case::ExperimentConfig;
use crate::data::{batcher::Seq2SeqBatcher, dataset::ReversalDataset};
use crate::infra::metrics::{EpochMetrics, MetricsLogger};
use crate::ml::model::{Seq2Seq, Seq2SeqConfig};
use crate::ml::{InferBackend, TrainBackend};

const DEFAULT_SHUFFLE_SEED: u64 = 42;

/// A trained model plus what happened along the way.
pub struct TrainingRun<B: Backend> {
    pub model:   Seq2Seq<B>,
    pub history: Vec<EpochMetrics>,
}

pub fn run_training(
    cfg:     &ExperimentConfig,
    dataset: ReversalDataset,
    metrics: Option<&MetricsLogger>,
) -> Result<TrainingRun<InferBackend>> {
    let device = <InferBackend as Backend>::Device::default();
    tracing::info!("Using device: {:?}", device);
    train_loop::<TrainBackend>(cfg, dataset, metrics, device)
}

pub fn train_loop<B: AutodiffBackend>(
    cfg:     &ExperimentConfig,
    dataset: ReversalDataset,
    metrics: Option<&MetricsLogger>,
    device:  B::Device,
) -> Result<TrainingRun<B::InnerBackend>> {
    if let Some(seed) = cfg.seed {
        B::seed(seed);
    }

    // ── Build model ───────────────────────────────────────────────────────────
    let mut model: Seq2Seq<B> = Seq2SeqConfig::new(cfg.cardinality, cfg.hidden).init(&device);
    tracing::info!(
        "Model ready: cardinality={}, hidden={}, {} examples",
        cfg.cardinality, cfg.hidden, dataset.example_count(),
    );

    // ── Adam optimiser ────────────────────────────────────────────────────────
    let mut optim = AdamConfig::new().with_epsilon(1e-7).init();

    let batcher = Seq2SeqBatcher::<B>::new(device.clone());
    let loader  = DataLoaderBuilder::new(batcher)
        .batch_size(cfg.batch_size)
        .shuffle(cfg.seed.unwrap_or(DEFAULT_SHUFFLE_SEED))
        .num_workers(1)
        .build(dataset);

    let mut history   = Vec::with_capacity(cfg.epochs);
    let mut best_loss = f64::INFINITY;

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {
        let mut loss_sum = 0.0f64;
        let mut batches  = 0usize;
        let mut correct  = 0usize;
        let mut tokens   = 0usize;

        for batch in loader.iter() {
            let targets = batch.targets.clone();
            let (loss, logits) = model.forward_loss(
                batch.source,
                batch.decoder_input,
                batch.targets,
            );

            loss_sum += loss.clone().into_scalar().elem::<f64>();
            batches  += 1;

            let [batch_size, steps] = targets.dims();
            let predicted = logits.argmax(2).squeeze::<2>(2);
            let hits: i64 = predicted
                .equal(targets)
                .int().sum().into_scalar().elem::<i64>();
            correct += hits as usize;
            tokens  += batch_size * steps;

            // Backward pass + Adam update
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.lr, model, grads);
        }

        let avg_loss = if batches > 0 { loss_sum / batches as f64 } else { f64::NAN };
        let accuracy = if tokens  > 0 { correct as f64 / tokens as f64 } else { 0.0 };
        let m = EpochMetrics::new(epoch, avg_loss, accuracy);

        println!(
            "Epoch {:>3}/{} | loss={:.4} | acc={:.1}%",
            epoch, cfg.epochs, avg_loss, accuracy * 100.0,
        );

        if m.is_improvement(best_loss) {
            best_loss = m.loss;
            tracing::debug!("New best loss {:.4} at epoch {}", best_loss, epoch);
        }
        if let Some(logger) = metrics {
            logger.log(&m)?;
        }
        history.push(m);
    }

    tracing::info!("Training complete!");
    Ok(TrainingRun { model: model.valid(), history })
}
