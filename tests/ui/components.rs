#[path = "components/accent_selector.rs"]
mod accent_selector;



#[path = "components/button.rs"]
mod button;


#[path = "components/modal.rs"]
mod modal;
