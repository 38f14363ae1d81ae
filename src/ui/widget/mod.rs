pub mod icon_button;
