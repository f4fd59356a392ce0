pub mod notify;
pub mod view_state;

pub use notify::{ChangeNotifier, PageField};
pub use view_state::{MediaPageViewState, Navigator};
