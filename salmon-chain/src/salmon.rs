//  SALMON.rs
//    by Lut99
//
//  Created:
//    14 Feb 2023, 14:02:17
//  Last edited:
//    15 Feb 2023, 10:24:50
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the provenance contract: who caught each salmon, where,
//!   and who holds it now.
//

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::spec::{Contract, Payload};
use crate::state::State;

pub use crate::errors::ContractError as Error;


/***** CONSTANTS *****/
/// The number of starter records the ledger initialization spawns if no count is given.
pub const DEFAULT_SPAWN_COUNT: usize = 20;

/// The identity that holds freshly spawned catches.
pub const DEFAULT_HOLDER: &str = "fredrick";

/// Vessel names to seed the ledger with.
const VESSELS: [ &str; 6 ] = [ "Northern Dawn", "Silver Maiden", "Sockeye Queen", "Morning Star", "Cold Current", "Lady Grey" ];

/// Catch locations to seed the ledger with.
const LOCATIONS: [ &str; 6 ] = [ "Bristol Bay", "Prince William Sound", "Copper River", "Kodiak", "Cook Inlet", "Chignik" ];





/***** HELPER FUNCTIONS *****/
/// Generates a random catch date in the spring 2018 season.
///
/// # Arguments
/// - `rng`: The random number generator to draw from.
///
/// # Returns
/// A date string in `YYYY-MM-DD` form, somewhere in 2018-01-01 to 2018-04-30.
fn random_catch_date(rng: &mut impl Rng) -> String {
    const DAYS_IN_MONTH: [ u32; 4 ] = [ 31, 28, 31, 30 ];
    let month: usize = rng.gen_range(0..DAYS_IN_MONTH.len());
    let day: u32 = rng.gen_range(1..=DAYS_IN_MONTH[month]);
    format!("2018-{:02}-{:02}", month + 1, day)
}





/***** AUXILLARY *****/
/// Defines a single salmon record as it is stored in the world state.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Salmon {
    /// The vessel that caught this salmon.
    pub vessel   : String,
    /// When the salmon was caught.
    pub datetime : String,
    /// Where the salmon was caught.
    pub location : String,
    /// The identity currently holding the salmon.
    pub holder   : String,
}

/// Defines the view on a salmon record that queries hand back: the record plus the id it is stored under.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SalmonDocument {
    /// The id the record is stored under.
    pub id : String,
    /// The record itself, inlined.
    #[serde(flatten)]
    pub salmon : Salmon,
}





/***** LIBRARY *****/
/// The provenance contract over salmon catches.
#[derive(Clone, Copy, Debug)]
pub struct SalmonContract;

impl SalmonContract {
    /// Seeds the ledger with a batch of starter records, all held by the fisherman.
    ///
    /// # Arguments
    /// - `state`: The world state to seed.
    /// - `args`: Zero arguments, or a single record count (defaults to `DEFAULT_SPAWN_COUNT`).
    ///
    /// # Errors
    /// This function errors if the count does not parse or the world state failed.
    fn init_ledger(&self, state: &mut dyn State, args: &[String]) -> Result<Payload, Error> {
        if args.len() > 1 { return Err(Error::IllegalArgCount{ function: "initLedger", got: args.len(), expected: "0 or 1" }); }

        // Resolve the count to spawn
        let count: usize = match args.first() {
            Some(raw) => match raw.parse() {
                Ok(count) => count,
                Err(err)  => { return Err(Error::IllegalCount{ raw: raw.clone(), err }); },
            },
            None => DEFAULT_SPAWN_COUNT,
        };

        // Spawn them, ids counting up from 1
        debug!("Seeding ledger with {} salmon...", count);
        let mut rng = rand::thread_rng();
        for i in 1..=count {
            let record: Salmon = Salmon {
                vessel   : VESSELS[rng.gen_range(0..VESSELS.len())].into(),
                datetime : random_catch_date(&mut rng),
                location : LOCATIONS[rng.gen_range(0..LOCATIONS.len())].into(),
                holder   : DEFAULT_HOLDER.into(),
            };
            self.put_salmon(state, &i.to_string(), &record)?;
        }

        Ok(None)
    }

    /// Records a single catch under the given id.
    ///
    /// # Arguments
    /// - `state`: The world state to record in.
    /// - `args`: Exactly five arguments: id, vessel, datetime, location, holder.
    ///
    /// # Errors
    /// This function errors if the argument count is off or the world state failed.
    fn record_salmon(&self, state: &mut dyn State, args: &[String]) -> Result<Payload, Error> {
        if args.len() != 5 { return Err(Error::IllegalArgCount{ function: "recordSalmon", got: args.len(), expected: "5" }); }

        let record: Salmon = Salmon {
            vessel   : args[1].clone(),
            datetime : args[2].clone(),
            location : args[3].clone(),
            holder   : args[4].clone(),
        };
        self.put_salmon(state, &args[0], &record)?;

        Ok(None)
    }

    /// Moves the salmon with the given id to a new holder.
    ///
    /// # Arguments
    /// - `state`: The world state to update.
    /// - `args`: Exactly two arguments: id, new holder.
    ///
    /// # Errors
    /// This function errors if the argument count is off, no salmon lives under the id or the world state failed.
    fn change_salmon_holder(&self, state: &mut dyn State, args: &[String]) -> Result<Payload, Error> {
        if args.len() != 2 { return Err(Error::IllegalArgCount{ function: "changeSalmonHolder", got: args.len(), expected: "2" }); }

        // Read-modify-write the record
        let mut record: Salmon = self.get_salmon(state, &args[0])?;
        record.holder = args[1].clone();
        self.put_salmon(state, &args[0], &record)?;

        Ok(None)
    }

    /// Looks up the salmon with the given id.
    ///
    /// # Arguments
    /// - `state`: The world state to query.
    /// - `args`: Exactly one argument: the id.
    ///
    /// # Returns
    /// The JSON document of the record, with the id inlined.
    ///
    /// # Errors
    /// This function errors if the argument count is off, no salmon lives under the id or the world state failed.
    fn query_salmon(&self, state: &dyn State, args: &[String]) -> Result<Payload, Error> {
        if args.len() != 1 { return Err(Error::IllegalArgCount{ function: "querySalmon", got: args.len(), expected: "1" }); }

        let record: Salmon = self.get_salmon(state, &args[0])?;
        let document: SalmonDocument = SalmonDocument{ id: args[0].clone(), salmon: record };
        match serde_json::to_vec(&document) {
            Ok(data) => Ok(Some(data)),
            Err(err) => Err(Error::RecordSerializeError{ what: "salmon", err }),
        }
    }

    /// Looks up all salmon whose ids fall in the given range.
    ///
    /// # Arguments
    /// - `state`: The world state to query.
    /// - `args`: Up to two arguments: the inclusive start id and the exclusive end id. Missing or empty bounds mean unbounded.
    ///
    /// # Returns
    /// A JSON array of the matching documents, in id order.
    ///
    /// # Errors
    /// This function errors if more than two arguments are given, a stored record is corrupt or the world state failed.
    fn query_all_salmon(&self, state: &dyn State, args: &[String]) -> Result<Payload, Error> {
        if args.len() > 2 { return Err(Error::IllegalArgCount{ function: "queryAllSalmon", got: args.len(), expected: "0 to 2" }); }

        let start: &str = args.first().map(|s| s.as_str()).unwrap_or("");
        let end: &str = args.get(1).map(|s| s.as_str()).unwrap_or("");

        // Collect the range into documents
        let mut documents: Vec<SalmonDocument> = Vec::new();
        for (id, data) in state.range(start, end)? {
            let record: Salmon = match serde_json::from_slice(&data) {
                Ok(record) => record,
                Err(err)   => { return Err(Error::RecordDeserializeError{ what: "salmon", id, err }); },
            };
            documents.push(SalmonDocument{ id, salmon: record });
        }
        debug!("queryAllSalmon ['{}', '{}') matched {} records", start, end, documents.len());

        match serde_json::to_vec(&documents) {
            Ok(data) => Ok(Some(data)),
            Err(err) => Err(Error::RecordSerializeError{ what: "salmon", err }),
        }
    }



    /// Reads and deserializes the record under the given id.
    fn get_salmon(&self, state: &dyn State, id: &str) -> Result<Salmon, Error> {
        let data: Vec<u8> = match state.get(id)? {
            Some(data) => data,
            None       => { return Err(Error::MissingRecord{ what: "salmon", id: id.into() }); },
        };
        match serde_json::from_slice(&data) {
            Ok(record) => Ok(record),
            Err(err)   => Err(Error::RecordDeserializeError{ what: "salmon", id: id.into(), err }),
        }
    }

    /// Serializes and stores the record under the given id.
    fn put_salmon(&self, state: &mut dyn State, id: &str, record: &Salmon) -> Result<(), Error> {
        let data: Vec<u8> = match serde_json::to_vec(record) {
            Ok(data) => data,
            Err(err) => { return Err(Error::RecordSerializeError{ what: "salmon", err }); },
        };
        state.put(id, data)?;
        Ok(())
    }
}

impl Contract for SalmonContract {
    #[inline]
    fn name(&self) -> &'static str { "salmon" }

    fn init(&self, state: &mut dyn State, args: &[String]) -> Result<Payload, Error> {
        self.init_ledger(state, args)
    }

    fn invoke(&self, state: &mut dyn State, function: &str, args: &[String]) -> Result<Payload, Error> {
        match function {
            "initLedger"         => self.init_ledger(state, args),
            "recordSalmon"       => self.record_salmon(state, args),
            "changeSalmonHolder" => self.change_salmon_holder(state, args),
            "querySalmon"        => self.query_salmon(state, args),
            "queryAllSalmon"     => self.query_all_salmon(state, args),

            raw => Err(Error::UnknownFunction{ raw: raw.into() }),
        }
    }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::state::MemoryState;

    use super::*;


    /// Helper function that runs the given function on the contract, panicking on errors.
    fn invoke(state: &mut MemoryState, function: &str, args: &[&str]) -> Payload {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        SalmonContract.invoke(state, function, &args).unwrap_or_else(|err| panic!("Function '{}' failed: {}", function, err))
    }


    /// A recorded salmon must come back as a document with the id inlined.
    #[test]
    fn record_then_query() {
        let mut state = MemoryState::new();
        invoke(&mut state, "recordSalmon", &[ "42", "Silver Maiden", "2018-03-14", "Bristol Bay", "fredrick" ]);

        let payload = invoke(&mut state, "querySalmon", &[ "42" ]).expect("Query returned no payload");
        let document: Value = serde_json::from_slice(&payload).expect("Payload was not JSON");
        assert_eq!(document, json!({
            "id"       : "42",
            "vessel"   : "Silver Maiden",
            "datetime" : "2018-03-14",
            "location" : "Bristol Bay",
            "holder"   : "fredrick",
        }));
    }

    /// Changing the holder must leave every other field alone.
    #[test]
    fn transfer_changes_holder_only() {
        let mut state = MemoryState::new();
        invoke(&mut state, "recordSalmon", &[ "7", "Northern Dawn", "2018-02-01", "Kodiak", "fredrick" ]);
        invoke(&mut state, "changeSalmonHolder", &[ "7", "alice" ]);

        let payload = invoke(&mut state, "querySalmon", &[ "7" ]).unwrap();
        let document: Value = serde_json::from_slice(&payload).unwrap();
        assert_eq!(document["holder"], "alice");
        assert_eq!(document["vessel"], "Northern Dawn");
        assert_eq!(document["datetime"], "2018-02-01");
        assert_eq!(document["location"], "Kodiak");
    }

    /// Querying an id nobody recorded is an error, not an empty payload.
    #[test]
    fn query_missing_is_error() {
        let mut state = MemoryState::new();
        let err = SalmonContract.invoke(&mut state, "querySalmon", &[ "404".into() ]).unwrap_err();
        assert!(matches!(err, Error::MissingRecord{ .. }), "Unexpected error: {}", err);

        let err = SalmonContract.invoke(&mut state, "changeSalmonHolder", &[ "404".into(), "bob".into() ]).unwrap_err();
        assert!(matches!(err, Error::MissingRecord{ .. }), "Unexpected error: {}", err);
    }

    /// Wrong argument counts and unknown functions must be rejected.
    #[test]
    fn illegal_invocations() {
        let mut state = MemoryState::new();

        let err = SalmonContract.invoke(&mut state, "recordSalmon", &[ "1".into() ]).unwrap_err();
        assert!(matches!(err, Error::IllegalArgCount{ function: "recordSalmon", got: 1, .. }), "Unexpected error: {}", err);

        let err = SalmonContract.invoke(&mut state, "swimUpstream", &[]).unwrap_err();
        assert!(matches!(err, Error::UnknownFunction{ .. }), "Unexpected error: {}", err);

        let err = SalmonContract.invoke(&mut state, "initLedger", &[ "plenty".into() ]).unwrap_err();
        assert!(matches!(err, Error::IllegalCount{ .. }), "Unexpected error: {}", err);
    }

    /// Initialization seeds the default number of records, all held by the fisherman.
    #[test]
    fn init_seeds_ledger() {
        let mut state = MemoryState::new();
        SalmonContract.init(&mut state, &[]).expect("Ledger initialization failed");
        assert_eq!(state.len(), DEFAULT_SPAWN_COUNT);

        let payload = invoke(&mut state, "querySalmon", &[ "1" ]).unwrap();
        let document: Value = serde_json::from_slice(&payload).unwrap();
        assert_eq!(document["holder"], DEFAULT_HOLDER);

        // An explicit count overrides the default
        let mut state = MemoryState::new();
        SalmonContract.init(&mut state, &[ "3".into() ]).expect("Ledger initialization failed");
        assert_eq!(state.len(), 3);
    }

    /// Ranged queries return the documents in id order, honouring the half-open bounds.
    #[test]
    fn query_all_ranges() {
        let mut state = MemoryState::new();
        for id in [ "1", "2", "3" ] {
            invoke(&mut state, "recordSalmon", &[ id, "Lady Grey", "2018-04-01", "Chignik", "fredrick" ]);
        }

        let payload = invoke(&mut state, "queryAllSalmon", &[]).unwrap();
        let documents: Vec<SalmonDocument> = serde_json::from_slice(&payload).unwrap();
        assert_eq!(documents.iter().map(|d| d.id.as_str()).collect::<Vec<&str>>(), vec![ "1", "2", "3" ]);

        let payload = invoke(&mut state, "queryAllSalmon", &[ "2", "3" ]).unwrap();
        let documents: Vec<SalmonDocument> = serde_json::from_slice(&payload).unwrap();
        assert_eq!(documents.iter().map(|d| d.id.as_str()).collect::<Vec<&str>>(), vec![ "2" ]);
    }
}
