pub struct NotificationChannelConfig {
    /// Capacity of the subscriber event buffer; slow subscribers
    /// observe a lag error instead of blocking the channel
    pub event_buffer_size: usize,
}
