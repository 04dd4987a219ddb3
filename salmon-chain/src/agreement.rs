//  AGREEMENT.rs
//    by Lut99
//
//  Created:
//    14 Feb 2023, 15:11:36
//  Last edited:
//    15 Feb 2023, 10:31:08
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the agreement contract: the price a restaurateur agreed to
//!   pay the fisherman for a catch.
//

use serde::{Deserialize, Serialize};

use crate::spec::{Contract, Payload};
use crate::state::State;

pub use crate::errors::ContractError as Error;


/***** AUXILLARY *****/
/// Defines a single price agreement as it is stored in the world state.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Agreement {
    /// The agreed price.
    pub price : f64,
}





/***** LIBRARY *****/
/// The contract over price agreements.
#[derive(Clone, Copy, Debug)]
pub struct AgreementContract;

impl AgreementContract {
    /// Records the agreed price under the given id.
    ///
    /// # Arguments
    /// - `state`: The world state to record in.
    /// - `args`: Exactly two arguments: id, price.
    ///
    /// # Errors
    /// This function errors if the argument count is off, the price does not parse or the world state failed.
    fn record_agreement(&self, state: &mut dyn State, args: &[String]) -> Result<Payload, Error> {
        if args.len() != 2 { return Err(Error::IllegalArgCount{ function: "recordAgreement", got: args.len(), expected: "2" }); }

        // Parse the price
        let price: f64 = match args[1].parse() {
            Ok(price) => price,
            Err(err)  => { return Err(Error::IllegalPrice{ raw: args[1].clone(), err }); },
        };

        // Serialize and store the agreement
        let data: Vec<u8> = match serde_json::to_vec(&Agreement{ price }) {
            Ok(data) => data,
            Err(err) => { return Err(Error::RecordSerializeError{ what: "agreement", err }); },
        };
        state.put(&args[0], data)?;

        Ok(None)
    }

    /// Looks up the agreement with the given id.
    ///
    /// # Arguments
    /// - `state`: The world state to query.
    /// - `args`: Exactly one argument: the id.
    ///
    /// # Returns
    /// The stored JSON document of the agreement.
    ///
    /// # Errors
    /// This function errors if the argument count is off, no agreement lives under the id or the world state failed.
    fn query_agreement(&self, state: &dyn State, args: &[String]) -> Result<Payload, Error> {
        if args.len() != 1 { return Err(Error::IllegalArgCount{ function: "queryAgreement", got: args.len(), expected: "1" }); }

        match state.get(&args[0])? {
            Some(data) => Ok(Some(data)),
            None       => Err(Error::MissingRecord{ what: "agreement", id: args[0].clone() }),
        }
    }
}

impl Contract for AgreementContract {
    #[inline]
    fn name(&self) -> &'static str { "agreement" }

    fn init(&self, _state: &mut dyn State, _args: &[String]) -> Result<Payload, Error> {
        // Nothing to seed for agreements
        Ok(None)
    }

    fn invoke(&self, state: &mut dyn State, function: &str, args: &[String]) -> Result<Payload, Error> {
        match function {
            "recordAgreement" => self.record_agreement(state, args),
            "queryAgreement"  => self.query_agreement(state, args),

            raw => Err(Error::UnknownFunction{ raw: raw.into() }),
        }
    }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use crate::state::MemoryState;

    use super::*;


    /// A recorded agreement must come back with the agreed price.
    #[test]
    fn record_then_query() {
        let mut state = MemoryState::new();
        AgreementContract.invoke(&mut state, "recordAgreement", &[ "sale-1".into(), "19.95".into() ]).expect("Failed to record agreement");

        let payload = AgreementContract.invoke(&mut state, "queryAgreement", &[ "sale-1".into() ]).expect("Failed to query agreement").expect("Query returned no payload");
        let agreement: Agreement = serde_json::from_slice(&payload).expect("Payload was not an agreement");
        assert_eq!(agreement, Agreement{ price: 19.95 });
    }

    /// Prices that do not parse, missing ids and unknown functions must be rejected.
    #[test]
    fn illegal_invocations() {
        let mut state = MemoryState::new();

        let err = AgreementContract.invoke(&mut state, "recordAgreement", &[ "sale-1".into(), "a fair amount".into() ]).unwrap_err();
        assert!(matches!(err, Error::IllegalPrice{ .. }), "Unexpected error: {}", err);

        let err = AgreementContract.invoke(&mut state, "queryAgreement", &[ "sale-404".into() ]).unwrap_err();
        assert!(matches!(err, Error::MissingRecord{ .. }), "Unexpected error: {}", err);

        let err = AgreementContract.invoke(&mut state, "recordSalmon", &[]).unwrap_err();
        assert!(matches!(err, Error::UnknownFunction{ .. }), "Unexpected error: {}", err);

        let err = AgreementContract.invoke(&mut state, "queryAgreement", &[]).unwrap_err();
        assert!(matches!(err, Error::IllegalArgCount{ function: "queryAgreement", got: 0, .. }), "Unexpected error: {}", err);
    }
}
