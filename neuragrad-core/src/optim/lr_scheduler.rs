use crate::error::NeuraGradError;
use crate::optim::optimizer_trait::Optimizer;

/// Defines the interface for learning rate schedulers.
///
/// Schedulers adjust the learning rate of the optimizer they own during
/// training according to a schedule.
pub trait LRScheduler<O: Optimizer> {
    /// Performs a step in the learning rate schedule.
    ///
    /// This method should be called once per epoch, before the optimizer
    /// step. With `Some(epoch)` the schedule jumps to that epoch; with `None`
    /// it advances by one.
    fn step(&mut self, epoch: Option<usize>) -> Result<(), NeuraGradError>;

    /// Returns the last learning rate set on the optimizer.
    fn get_last_lr(&self) -> f64;

    /// Returns a reference to the optimizer associated with this scheduler.
    fn optimizer(&self) -> &O;

    /// Returns a mutable reference to the optimizer associated with this scheduler.
    fn optimizer_mut(&mut self) -> &mut O;
}

/// Linearly interpolates the learning rate from `start_lr` down to `end_lr`.
///
/// At epoch `e` the rate is `start_lr - (start_lr - end_lr) * e / total_epochs`.
/// From `total_epochs` on it stays at `end_lr`.
#[derive(Debug, Clone)]
pub struct LinearDecayLR<O: Optimizer> {
    optimizer: O,
    start_lr: f64,
    end_lr: f64,
    total_epochs: usize,
    last_epoch: usize,
}

impl<O: Optimizer> LinearDecayLR<O> {
    /// Creates a new `LinearDecayLR` scheduler and sets the optimizer's
    /// learning rate to `start_lr` (epoch 0).
    pub fn new(mut optimizer: O, start_lr: f64, end_lr: f64, total_epochs: usize) -> Self {
        optimizer.set_lr(start_lr);
        LinearDecayLR {
            optimizer,
            start_lr,
            end_lr,
            total_epochs,
            last_epoch: 0,
        }
    }

    /// Learning rate of a given epoch.
    pub fn lr_at(&self, epoch: usize) -> f64 {
        if epoch >= self.total_epochs {
            return self.end_lr;
        }
        let progress = epoch as f64 / self.total_epochs as f64;
        self.start_lr - (self.start_lr - self.end_lr) * progress
    }
}

impl<O: Optimizer> LRScheduler<O> for LinearDecayLR<O> {
    fn step(&mut self, epoch: Option<usize>) -> Result<(), NeuraGradError> {
        self.last_epoch = epoch.unwrap_or(self.last_epoch + 1);
        let lr = self.lr_at(self.last_epoch);
        self.optimizer.set_lr(lr);
        Ok(())
    }

    fn get_last_lr(&self) -> f64 {
        self.optimizer.lr()
    }

    fn optimizer(&self) -> &O {
        &self.optimizer
    }

    fn optimizer_mut(&mut self) -> &mut O {
        &mut self.optimizer
    }
}

#[cfg(test)]
#[path = "lr_scheduler_tests.rs"]
mod tests;
