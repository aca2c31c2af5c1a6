use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Storage {
    Table,
    Key,
    Value,
}
