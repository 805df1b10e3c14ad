//! Synthetic starter data used when no store file exists yet: a handful
//! of days around today with jittered office hours, so a fresh install
//! shows a populated table instead of an empty one.

use crate::models::entry::TimeEntry;
use crate::store::TimeRecordStore;
use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;

const BASE_CAME: (u32, u32) = (8, 30);
const BASE_WENT: (u32, u32) = (17, 0);

fn jittered(base: (u32, u32), rng: &mut impl Rng) -> NaiveTime {
    let base = NaiveTime::from_hms_opt(base.0, base.1, 0).unwrap();
    base + Duration::seconds(rng.gen_range(-3600..=3600))
}

/// Entries for today-2 ..= today+2, with one note on the earliest day.
pub fn seed_store(today: NaiveDate) -> TimeRecordStore {
    let mut rng = rand::thread_rng();
    let mut store = TimeRecordStore::new();

    for offset in -2..=2i64 {
        let date = today + Duration::days(offset);
        store.insert(
            date,
            TimeEntry::new(
                Some(jittered(BASE_CAME, &mut rng)),
                Some(jittered(BASE_WENT, &mut rng)),
                "",
            ),
        );
    }

    let first = today - Duration::days(2);
    store.entry_mut(first).note = "Sample entry with a note attached".to_string();

    store
}
