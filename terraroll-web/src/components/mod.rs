pub mod category_toggles;
pub mod result_card;
pub mod toast;
