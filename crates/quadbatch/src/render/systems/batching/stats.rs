//! Batch statistics

/// Counters for batch submission, accumulated until [`reset_stats`]
///
/// [`reset_stats`]: crate::render::QuadBatch::reset_stats
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Quads accepted by `draw`
    pub quads_drawn: usize,

    /// Non-empty flushes, explicit or implicit
    pub flushes: usize,

    /// Flushes forced by a full buffer
    pub implicit_flushes: usize,

    /// Vertices handed to the device (counted once per flush, not per pass)
    pub vertices_submitted: usize,

    /// `draw_user_primitives` calls, one per effect pass per flush
    pub draw_calls: usize,

    /// Quads thrown away by `reset` or `unload`
    pub quads_discarded: usize,
}

impl BatchStats {
    /// Calculate average quads per flush
    pub fn avg_quads_per_flush(&self) -> f32 {
        if self.flushes == 0 {
            0.0
        } else {
            (self.vertices_submitted / super::VERTICES_PER_QUAD) as f32 / self.flushes as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_stats() {
        let mut stats = BatchStats::default();
        assert_eq!(stats.avg_quads_per_flush(), 0.0);

        stats.flushes = 4;
        stats.vertices_submitted = super::super::VERTICES_PER_QUAD * 10;
        assert_eq!(stats.avg_quads_per_flush(), 2.5);
    }
}
