// Adapter: a third-party gateway wrapped to look like our PaymentGateway.

use crate::console::Transcript;
use crate::error::PatternError;

/// The interface client code expects.
pub trait PaymentGateway {
    fn process_payment(&self, amount: u64, out: &mut Transcript) -> Result<(), PatternError>;
}

/// The bare interface with nothing behind it.
pub struct UnimplementedGateway;

impl PaymentGateway for UnimplementedGateway {
    fn process_payment(&self, _amount: u64, _out: &mut Transcript) -> Result<(), PatternError> {
        Err(PatternError::not_implemented("process_payment", "PaymentGateway"))
    }
}

/// Vendor code with its own method name. We cannot change it.
pub struct ThirdPartyPaymentGateway;

impl ThirdPartyPaymentGateway {
    pub fn perform_payment(&self, total_amount: u64, out: &mut Transcript) {
        out.say(format!(
            "Processing payment for ${total_amount} through ThirdPartyPaymentGateway."
        ));
    }
}

pub struct ThirdPartyPaymentAdapter {
    gateway: ThirdPartyPaymentGateway,
}

impl ThirdPartyPaymentAdapter {
    pub fn new(gateway: ThirdPartyPaymentGateway) -> Self {
        Self { gateway }
    }
}

impl PaymentGateway for ThirdPartyPaymentAdapter {
    fn process_payment(&self, amount: u64, out: &mut Transcript) -> Result<(), PatternError> {
        self.gateway.perform_payment(amount, out);
        Ok(())
    }
}

pub fn make_payment(
    gateway: &dyn PaymentGateway,
    amount: u64,
    out: &mut Transcript,
) -> Result<(), PatternError> {
    gateway.process_payment(amount, out)
}

pub fn demo(out: &mut Transcript) {
    if let Err(err) = make_payment(&UnimplementedGateway, 100, out) {
        out.error(err.to_string());
    }

    let adapter = ThirdPartyPaymentAdapter::new(ThirdPartyPaymentGateway);
    if let Err(err) = make_payment(&adapter, 150, out) {
        out.error(err.to_string());
    }
}
