pub mod snackbar;
