use tracing::{debug, info};
use userpref_store::PreferenceStore;
use userpref_types::UserRecord;

use crate::{validate, FormInput, SubmitError};

/// Validates the form and, only if every field passes, merges it into the
/// stored record and writes it back. Returns the record as saved.
pub fn submit<S>(store: &S, input: &FormInput) -> Result<UserRecord, SubmitError>
where
    S: PreferenceStore + ?Sized,
{
    let form = match validate(input) {
        Ok(form) => form,
        Err(e) => {
            debug!("Rejected form: {}", e);
            return Err(e.into());
        }
    };

    let mut record = store.read();
    let mode = record.form_mode();
    form.apply_to(&mut record);
    store.write(&record)?;

    info!("Saved user record ({:?})", mode);
    Ok(record)
}
