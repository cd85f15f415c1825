use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(
    InvalidMonetaryAmount,
    "Invalid monetary amount: '{value}'.",
    { value: &str }
);

// Billing-input validation.
define_client_error!(
    NegativeCostAmount,
    "Negative amount ({amount}) for cost category '{category}'. Operating costs must be non-negative.",
    { category: &str, amount: f64 }
);
define_client_error!(
    NegativePrepayment,
    "Negative monthly prepayment ({amount}). Prepayments must be non-negative.",
    { amount: f64 }
);
define_client_error!(
    InvalidPrepaymentMonths,
    "Invalid number of prepaid months ({months}). At least one month must be covered.",
    { months: u32 }
);
define_client_error!(
    NegativeShareValue,
    "Negative tenant share value ({value}). Share values are measured in the property's distribution key and cannot be negative.",
    { value: f64 }
);

// Statement export.
define_internal_error!(
    StatementWriteFailed,
    "Failed to write statement document to '{path}'.",
    { path: &str }
);
