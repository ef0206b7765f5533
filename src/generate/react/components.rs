use super::Names;
use crate::generate::File;

pub(super) fn add_components(out: &mut Vec<File>, names: &Names) {
    let dir = names.component_dir();
    out.push(File {
        path: dir.join(format!("{}Container.tsx", names.component)),
        content: mk_container(names),
    });
    out.push(File {
        path: dir.join(format!("{}Content.tsx", names.component)),
        content: mk_content(names),
    });
}

fn mk_container(names: &Names) -> String {
    let c = &names.component;
    let mut s = String::new();
    cpf!(s, "import React, {{ useEffect }} from 'react';");
    cpf!(s, "import {{ useDispatch, useSelector }} from 'react-redux';");
    cpf!(
        s,
        "import {{ {}, selected{}, {}Loading }} from '../../slices/{}Slice';",
        names.requested_action(),
        c,
        names.camel,
        c
    );
    cpf!(s, "import {0}Content from './{0}Content';", c);
    cpf!(s, "");
    cpf!(s, "const {}Container = () => {{", c);
    cpf!(s, "    const dispatch = useDispatch();");
    cpf!(s, "    const data = useSelector(selected{});", c);
    cpf!(s, "    const loading = useSelector({}Loading);", names.camel);
    cpf!(s, "");
    cpf!(s, "    useEffect(() => {{");
    cpf!(s, "        dispatch({}());", names.requested_action());
    cpf!(s, "    }}, [dispatch]);");
    cpf!(s, "");
    cpf!(s, "    return <{}Content data={{data}} loading={{loading}} />;", c);
    cpf!(s, "}};");
    cpf!(s, "");
    cpf!(s, "export default {}Container;", c);
    s
}

fn mk_content(names: &Names) -> String {
    let c = &names.component;
    let mut s = String::new();
    cpf!(s, "import React from 'react';");
    cpf!(s, "import {{ {0} }} from '../../types/{0}.types';", c);
    cpf!(s, "");
    cpf!(s, "interface {}ContentProps {{", c);
    cpf!(s, "    data: {}[];", c);
    cpf!(s, "    loading: boolean;");
    cpf!(s, "}}");
    cpf!(s, "");
    cpf!(s, "const {0}Content = ({{ data, loading }}: {0}ContentProps) => {{", c);
    cpf!(s, "    if (loading) {{");
    cpf!(s, "        return <p>Loading...</p>;");
    cpf!(s, "    }}");
    cpf!(s, "    return (");
    cpf!(s, "        <div>");
    cpf!(s, "            <h1>{} Data</h1>", c);
    cpf!(s, "            <ul>");
    cpf!(s, "                {{data.map((item, idx) => (");
    cpf!(s, "                    <li key={{idx}}>{{JSON.stringify(item)}}</li>");
    cpf!(s, "                ))}}");
    cpf!(s, "            </ul>");
    cpf!(s, "        </div>");
    cpf!(s, "    );");
    cpf!(s, "}};");
    cpf!(s, "");
    cpf!(s, "export default {}Content;", c);
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn both_stubs_in_component_dir() {
        let mut out = Vec::new();
        add_components(&mut out, &Names::new("Order").unwrap());
        let paths: Vec<PathBuf> = out.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("components/Order/OrderContainer.tsx"),
                PathBuf::from("components/Order/OrderContent.tsx"),
            ]
        );
    }

    #[test]
    fn container_dispatches_on_mount() {
        let s = mk_container(&Names::new("Order").unwrap());
        assert!(s.contains(
            "import { fetchOrderRequested, selectedOrder, orderLoading } from '../../slices/OrderSlice';\n"
        ));
        assert!(s.contains("        dispatch(fetchOrderRequested());\n"));
        assert!(s.contains("    return <OrderContent data={data} loading={loading} />;\n"));
    }

    #[test]
    fn content_renders_items() {
        let s = mk_content(&Names::new("Order").unwrap());
        assert!(s.contains("const OrderContent = ({ data, loading }: OrderContentProps) => {\n"));
        assert!(s.contains("                    <li key={idx}>{JSON.stringify(item)}</li>\n"));
        assert!(s.ends_with("export default OrderContent;\n"));
    }
}
