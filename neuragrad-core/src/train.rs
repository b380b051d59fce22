//! Full-batch training loop for single-output classifiers.
//!
//! One epoch runs the whole dataset through the model, builds the data loss
//! plus an L2 penalty, backpropagates once and applies one SGD update. Every
//! node created during the epoch is dropped again with
//! [`Graph::rewind`], so the graph does not grow across epochs.

use crate::autograd::{Graph, NodeId};
use crate::error::NeuraGradError;
use crate::nn::{l2_penalty, Loss, Module};
use crate::optim::{LRScheduler, LinearDecayLR, Optimizer, SgdOptimizer};

/// Hyper-parameters of [`Trainer::fit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    /// Learning rate of the first epoch.
    pub lr_start: f64,
    /// Learning rate the linear schedule decays towards.
    pub lr_end: f64,
    /// Weight of the L2 penalty added to the data loss.
    pub l2_alpha: f64,
    pub loss: Loss,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 100,
            lr_start: 1.0,
            lr_end: 0.1,
            l2_alpha: 1e-4,
            loss: Loss::BinaryCrossEntropy,
        }
    }
}

/// Metrics of one epoch, measured before that epoch's parameter update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    pub epoch: usize,
    /// Data loss plus L2 penalty.
    pub loss: f64,
    pub accuracy: f64,
    /// Learning rate used for the update.
    pub lr: f64,
}

/// Fraction of predictions on the right side of 0.5.
///
/// A sample counts as correct when `label == 1.0` and `prediction >= 0.5`, or
/// when `label != 1.0` and `prediction < 0.5`. Empty input yields 0.
pub fn accuracy(labels: &[f64], predictions: &[f64]) -> f64 {
    if predictions.is_empty() {
        return 0.0;
    }
    let correct = labels
        .iter()
        .zip(predictions)
        .filter(|(&y, &p)| (y == 1.0) == (p >= 0.5))
        .count();
    correct as f64 / predictions.len() as f64
}

#[derive(Debug, Clone, Default)]
pub struct Trainer {
    config: TrainConfig,
}

impl Trainer {
    pub fn new(config: TrainConfig) -> Self {
        Trainer { config }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Trains `model` on `(xs, ys)` and returns one report per epoch.
    ///
    /// Features and labels are lifted into leaves once, then each epoch
    /// rebuilds the forward graph on top of them. When the call returns the
    /// graph holds exactly the nodes it held before, with updated parameter
    /// values.
    ///
    /// # Errors
    /// `DimensionMismatch` if `xs` and `ys` differ in length or a sample has
    /// the wrong width, `EmptyInput` if there are no samples. Errors from the
    /// model or the loss abort training; updates of earlier epochs are kept.
    pub fn fit<M>(
        &self,
        graph: &mut Graph,
        model: &M,
        xs: &[Vec<f64>],
        ys: &[f64],
    ) -> Result<Vec<EpochReport>, NeuraGradError>
    where
        M: Module<Output = NodeId>,
    {
        if xs.len() != ys.len() {
            return Err(NeuraGradError::DimensionMismatch {
                expected: xs.len(),
                actual: ys.len(),
                operation: "Trainer::fit labels".to_string(),
            });
        }
        if xs.is_empty() {
            return Err(NeuraGradError::EmptyInput {
                operation: "Trainer::fit".to_string(),
            });
        }

        let start = graph.checkpoint();
        let inputs = graph.leaves_from_matrix(xs);
        let targets = graph.leaves(ys);
        log::info!(
            "training {} parameters on {} samples for {} epochs ({} loss)",
            model.parameters().len(),
            xs.len(),
            self.config.epochs,
            self.config.loss
        );

        let optimizer = SgdOptimizer::new(model.parameters(), self.config.lr_start);
        let mut scheduler = LinearDecayLR::new(
            optimizer,
            self.config.lr_start,
            self.config.lr_end,
            self.config.epochs,
        );

        let batch = Batch {
            inputs: &inputs,
            targets: &targets,
            labels: ys,
        };
        let mut reports = Vec::with_capacity(self.config.epochs);
        let mut outcome = Ok(());
        for epoch in 0..self.config.epochs {
            match self.run_epoch(graph, model, &batch, &mut scheduler, epoch) {
                Ok(report) => reports.push(report),
                Err(err) => {
                    outcome = Err(err);
                    break;
                }
            }
        }
        graph.rewind(start);
        outcome.map(|()| reports)
    }

    /// Runs one epoch and drops every node it created, even on error.
    fn run_epoch<M>(
        &self,
        graph: &mut Graph,
        model: &M,
        batch: &Batch<'_>,
        scheduler: &mut LinearDecayLR<SgdOptimizer>,
        epoch: usize,
    ) -> Result<EpochReport, NeuraGradError>
    where
        M: Module<Output = NodeId>,
    {
        let checkpoint = graph.checkpoint();
        let result = self.epoch_step(graph, model, batch, scheduler, epoch);
        graph.rewind(checkpoint);
        result
    }

    fn epoch_step<M>(
        &self,
        graph: &mut Graph,
        model: &M,
        batch: &Batch<'_>,
        scheduler: &mut LinearDecayLR<SgdOptimizer>,
        epoch: usize,
    ) -> Result<EpochReport, NeuraGradError>
    where
        M: Module<Output = NodeId>,
    {
        let mut predictions = Vec::with_capacity(batch.inputs.len());
        let mut predicted = Vec::with_capacity(batch.inputs.len());
        for x in batch.inputs {
            let out = model.forward(graph, x)?;
            predicted.push(graph.value(out)?);
            predictions.push(out);
        }
        let accuracy = accuracy(batch.labels, &predicted);

        let data_loss = self.config.loss.compute(graph, batch.targets, &predictions)?;
        let reg_loss = l2_penalty(graph, scheduler.optimizer().params(), self.config.l2_alpha)?;
        let total_loss = graph.add(data_loss, reg_loss)?;
        let loss = graph.value(total_loss)?;

        scheduler.optimizer().zero_grad(graph)?;
        graph.backward(total_loss)?;
        scheduler.step(Some(epoch))?;
        let lr = scheduler.get_last_lr();
        scheduler.optimizer_mut().step(graph)?;

        log::info!("{}: loss:{:.4} | accuracy:{:.2}", epoch, loss, accuracy);
        Ok(EpochReport {
            epoch,
            loss,
            accuracy,
            lr,
        })
    }
}

/// Leaves of the training set, lifted once per `fit`.
struct Batch<'a> {
    inputs: &'a [Vec<NodeId>],
    targets: &'a [NodeId],
    labels: &'a [f64],
}

#[cfg(test)]
#[path = "train_test.rs"]
mod tests;
