use anyhow::Result;

pub trait InsertMapper<'a, D, R>: Sync + Send {
    fn to_row(&self, domain: &'a D) -> Result<R>;
}

pub trait RowMapper<R, D>: Sync + Send {
    fn to_domain(&self, row: &R) -> Result<D>;
}
