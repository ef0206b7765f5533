use super::schemes::RootTypes;
use super::types;
use super::Names;
use crate::generate::File;

pub(super) fn add_serializer(out: &mut Vec<File>, names: &Names, root_types: &RootTypes) {
    out.push(File {
        path: names.serializer_path(),
        content: mk_serializer(names, root_types),
    });
}

// date-time fields come over the wire as strings
fn mk_serializer(names: &Names, root_types: &RootTypes) -> String {
    let c = &names.component;
    let mut s = String::new();
    cpf!(s, "import {{ {0} }} from '../types/{0}.types';", c);
    cpf!(s, "");
    cpf!(s, "export const serialize{0} = (raw: any): {0}[] => {{", c);
    cpf!(s, "  const items: any[] = Array.isArray(raw) ? raw : [raw];");
    if root_types.date_fields.is_empty() {
        cpf!(s, "  return items.map((item) => ({{ ...item }}) as {});", c);
    } else {
        cpf!(s, "  return items.map((item) => ({{");
        cpf!(s, "    ...item,");
        for field in &root_types.date_fields {
            let read = types::property_access("item", field);
            cpf!(
                s,
                "    {0}: {1} != null ? new Date({1}) : {1},",
                types::property_key(field),
                read
            );
        }
        cpf!(s, "  }}) as {});", c);
    }
    cpf!(s, "}};");
    s
}
