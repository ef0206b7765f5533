use super::Names;
use crate::generate::File;

pub(super) fn add_slice(out: &mut Vec<File>, names: &Names) {
    out.push(File {
        path: names.slice_path(),
        content: mk_slice(names),
    });
}

fn mk_slice(names: &Names) -> String {
    let c = &names.component;
    let mut s = String::new();
    cpf!(s, "import {{ createSlice, PayloadAction }} from '@reduxjs/toolkit';");
    cpf!(s, "import {{ StoreState }} from '../store';");
    cpf!(s, "import {{ {0} }} from '../types/{0}.types';", c);
    cpf!(s, "");
    cpf!(s, "export interface {}State {{", c);
    cpf!(s, "    data: {}[];", c);
    cpf!(s, "    loading: boolean;");
    cpf!(s, "    loadingMessage: string;");
    cpf!(s, "    error: string | null;");
    cpf!(s, "}}");
    cpf!(s, "");
    cpf!(s, "const initialState: {}State = {{", c);
    cpf!(s, "    data: [],");
    cpf!(s, "    loading: false,");
    cpf!(s, "    loadingMessage: '',");
    cpf!(s, "    error: null,");
    cpf!(s, "}};");
    cpf!(s, "");
    cpf!(s, "const {}Slice = createSlice({{", c);
    cpf!(s, "    name: '{}',", c);
    cpf!(s, "    initialState,");
    cpf!(s, "    reducers: {{");
    cpf!(s, "        {}(state) {{", names.requested_action());
    cpf!(s, "            state.loading = true;");
    cpf!(s, "            state.loadingMessage = 'Fetching items..';");
    cpf!(s, "            state.error = null;");
    cpf!(s, "        }},");
    cpf!(s, "        {}(state, action: PayloadAction<{}[]>) {{", names.succeeded_action(), c);
    cpf!(s, "            state.data = action.payload;");
    cpf!(s, "            state.loading = false;");
    cpf!(s, "            state.loadingMessage = '';");
    cpf!(s, "        }},");
    cpf!(s, "        {}(state, action: PayloadAction<string>) {{", names.failed_action());
    cpf!(s, "            state.error = action.payload;");
    cpf!(s, "            state.loading = false;");
    cpf!(s, "            state.loadingMessage = '';");
    cpf!(s, "        }},");
    cpf!(s, "    }},");
    cpf!(s, "}});");
    cpf!(s, "");
    cpf!(
        s,
        "export const {{ {}, {}, {} }} = {}Slice.actions;",
        names.requested_action(),
        names.succeeded_action(),
        names.failed_action(),
        c
    );
    cpf!(s, "export const selected{0} = (state: StoreState): {0}[] => state.{0}.data;", c);
    cpf!(s, "export const {}Loading = (state: StoreState): boolean => state.{}.loading;", names.camel, c);
    cpf!(s, "export const {}Error = (state: StoreState): string | null => state.{}.error;", names.camel, c);
    cpf!(s, "export default {}Slice.reducer;", c);
    s
}
