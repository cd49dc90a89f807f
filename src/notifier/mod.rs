mod event_grid;

pub use event_grid::EventNotifier;
