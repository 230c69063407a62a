use soroban_sdk::contracterror;

//-----------------------------------------------------------------------------
// Payroll Errors
//-----------------------------------------------------------------------------

/// Errors returned by every payroll entry point.
///
/// Any error aborts the whole invocation, so no partial state is ever
/// visible to a later call.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PayrollError {
    /// Caller does not hold the role the operation requires.
    Unauthorized = 1,
    UnknownEmployee = 2,
    UnknownToken = 3,
    DuplicateEmployee = 4,
    DuplicateToken = 5,
    /// Salary outside the representable domain (negative).
    InvalidSalary = 6,
    /// Exchange rate must be at least 1.
    InvalidRate = 7,
    /// Percentage above 100, or a running total that would exceed 100.
    InvalidPercentage = 8,
    /// Token was never granted to the employee, or has no allocation.
    TokenNotAllowed = 9,
    /// Emergency halt switch is engaged.
    PaymentsHalted = 10,
    /// Payroll balance cannot cover the disbursement.
    InsufficientFunds = 11,
    /// Token contract refused the transfer for a reason other than balance.
    TransferRejected = 12,
    /// Runway requested while the monthly burn rate is zero.
    ZeroBurnRate = 13,
    /// Payday requested before the allocation sums to exactly 100.
    AllocationIncomplete = 14,
    /// Funding amount must be positive.
    InvalidAmount = 15,
    Overflow = 16,
}
