pub mod config;
pub mod send;
pub mod validate;

use clap::Args;

use crate::form::FormValues;

/// Form fields given on the command line
#[derive(Args, Debug, Clone)]
pub struct FieldArgs {
    /// Sender name (at least 2 characters)
    #[arg(long, default_value = "")]
    pub name: String,

    /// Phone, +375XXXXXXXXX or 80XXXXXXXXX
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Message text (at least 2 characters)
    #[arg(long, default_value = "")]
    pub message: String,
}

impl From<FieldArgs> for FormValues {
    fn from(args: FieldArgs) -> Self {
        FormValues::new(args.name, args.phone, args.message)
    }
}
