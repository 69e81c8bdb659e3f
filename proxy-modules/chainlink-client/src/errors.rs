pub static ERR_TRANSFER_REJECTED: &str = "Unable to transfer payment to oracle";
pub static ERR_ALREADY_PENDING: &str = "Request is already pending";
pub static ERR_UNAUTHORIZED_FULFILLMENT: &str = "Source must be the oracle of the request";
pub static ERR_UNCONFIGURED: &str = "Chainlink token or oracle not configured";
pub static ERR_REQUEST_NOT_PENDING: &str = "Request is not pending";
pub static ERR_NAME_NOT_RESOLVED: &str = "Name could not be resolved";
pub static ERR_NAME_SERVICE_UNSET: &str = "Name service not configured";
