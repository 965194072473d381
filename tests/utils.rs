#[path = "utils/color.rs"]
mod color;

#[path = "utils/datetime.rs"]
mod datetime;

#[path = "utils/html.rs"]
mod html;

#[path = "utils/initials.rs"]
mod initials;
