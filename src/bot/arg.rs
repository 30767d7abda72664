use crate::{config::Footer, lookup::FactClient};

#[derive(Clone, Debug)]
pub(super) struct NecessaryArg {
    lookup: FactClient,
    footer: Footer,
}

impl NecessaryArg {
    pub(super) fn new(lookup: FactClient, footer: Footer) -> Self {
        Self { lookup, footer }
    }

    pub(super) fn lookup(&self) -> &FactClient {
        &self.lookup
    }

    pub(super) fn footer(&self) -> &Footer {
        &self.footer
    }
}
