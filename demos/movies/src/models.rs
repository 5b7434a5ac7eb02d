use sgorm::{Field, Model};

pub fn movie() -> Model {
    Model::builder("Movie")
        .field("title", Field::char("标题", 50))
        .field("description", Field::char("电影描述", 60))
        .build()
}

pub fn author() -> Model {
    Model::builder("Author")
        .table_name("Authors")
        .field("name", Field::char("姓名", 50))
        .field("sex", Field::boolean("性别"))
        .build()
}

pub fn all() -> Vec<Model> {
    vec![movie(), author()]
}
